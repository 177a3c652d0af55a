//! Fixed word lists used by the random person factory

pub const MALE_NAMES: [&str; 9] = [
    "Argel",
    "Kayvaan",
    "John",
    "Vlad",
    "Salam",
    "Viktor",
    "Grimaldus",
    "Merek",
    "Archon",
];

pub const FEMALE_NAMES: [&str; 9] = [
    "Katarina",
    "Efrael",
    "Luce",
    "Mirael",
    "Cyrene",
    "Elena",
    "Katerine",
    "Amberley",
    "Severina",
];

pub const SURNAMES: [&str; 6] = [
    "Loyalist",
    "Fortheemperror",
    "Waaaaaagh",
    "Chaos",
    "Traitor",
    "Heresy",
];
