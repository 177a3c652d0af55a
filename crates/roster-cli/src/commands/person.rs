//! Person command
//!
//! Usage: roster person <NAME> <SURNAME> <AGE> <GENDER> [--json]

use clap::{Args, ValueEnum};
use roster_core::{log_op_end, log_op_error, log_op_start, Gender, Person};

#[derive(Debug, Args)]
pub struct PersonArgs {
    /// Name (Latin or Cyrillic letters, at most one inner hyphen)
    pub name: String,

    /// Surname, in the same script as the name
    pub surname: String,

    /// Age in years
    #[arg(allow_negative_numbers = true)]
    pub age: i32,

    /// Gender
    #[arg(value_enum)]
    pub gender: GenderArg,

    /// Print the person as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(gender: GenderArg) -> Self {
        match gender {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Execute person command
pub fn execute(args: PersonArgs) -> Result<(), Box<dyn std::error::Error>> {
    log_op_start!("person_render", age = args.age);
    let start = std::time::Instant::now();

    let person = Person::new(args.name, args.surname, args.age, args.gender.into()).map_err(
        |e| {
            log_op_error!(
                "person_render",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        },
    )?;

    log_op_end!(
        "person_render",
        duration_ms = start.elapsed().as_millis() as u64
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(&person)?);
    } else {
        println!("{}", person);
    }

    Ok(())
}
