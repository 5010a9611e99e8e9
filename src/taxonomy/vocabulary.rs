use crate::models::skill::SkillCategory;

use SkillCategory::*;

/// Built-in skill vocabulary, in match-priority order.
pub const BUILTIN_SKILLS: &[(&str, SkillCategory)] = &[
    ("java", Language),
    ("python", Language),
    ("kotlin", Language),
    ("flutter", Framework),
    ("react", Framework),
    ("angular", Framework),
    ("node", Framework),
    ("swift", Language),
    ("ruby", Language),
    ("php", Language),
    ("c++", Language),
    ("c#", Language),
    ("go", Language),
    ("docker", Tool),
    ("kubernetes", Tool),
    ("aws", Tool),
    ("azure", Tool),
    ("gcp", Tool),
    ("restful", Practice),
    ("graphql", Tool),
    ("ai", Domain),
    ("ml", Domain),
    ("dl", Domain),
    ("cv", Domain),
    ("nlp", Domain),
    ("cloud", Domain),
    ("devops", Practice),
    ("agile", Practice),
    ("ci/cd", Practice),
    ("sql", Language),
    ("nosql", Tool),
    ("mongodb", Tool),
    ("firebase", Tool),
    ("redux", Library),
    ("git", Tool),
    ("jira", Tool),
    ("confluence", Tool),
    ("trello", Tool),
    ("testing", Practice),
    ("tdd", Practice),
    ("bdd", Practice),
    ("scrum", Practice),
    ("microservices", Domain),
    ("big data", Domain),
    ("data science", Domain),
    ("machine learning", Domain),
    ("deep learning", Domain),
    ("nlp", Domain),
    ("cloud computing", Domain),
    ("containerization", Practice),
    ("orchestration", Practice),
    ("api", Practice),
    ("mvc", Practice),
    ("mvvm", Practice),
    ("mvp", Practice),
    (".net", Framework),
    ("spring", Framework),
    ("django", Framework),
    ("express", Framework),
    ("flask", Framework),
    ("ios", Domain),
    ("android", Domain),
    ("dart", Language),
    ("objective-c", Language),
    ("cybersecurity", Domain),
    ("penetration testing", Practice),
    ("firewalls", Tool),
    ("siem", Tool),
    ("threat intelligence", Domain),
    ("data analysis", Domain),
    ("pandas", Library),
    ("numpy", Library),
    ("matplotlib", Library),
    ("seaborn", Library),
    ("scikit-learn", Library),
    ("tensorflow", Library),
    ("keras", Library),
    ("pytorch", Library),
];
