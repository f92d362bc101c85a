//! # Interactive Menu
//!
//! The numbered menu loop. Each entry maps onto one API call; anything the
//! user typed wrong is reported and the menu comes back. Invalid dates and
//! numbers are asked for again on the spot. End of input behaves like
//! choosing "Exit".
//!
//! Loading and saving are explicit menu entries here: the shell starts from
//! an empty registry and never writes unless asked to.

use super::render::{
    format_record, render_animal_list, render_commands, render_messages, render_summary,
};
use chrono::NaiveDate;
use kennel::api::{CmdMessage, CmdResult, KennelApi};
use kennel::config::Locale;
use kennel::error::{KennelError, Result};
use kennel::model::{parse_commands, AnimalKind, NewAnimal};
use kennel::registry::AnimalUpdate;
use kennel::store::DataStore;
use std::io::{BufRead, Write};
use std::str::FromStr;

const MAIN_MENU: &str = "\
1. Add an animal
2. Load from file
3. List an animal's commands
4. Teach an animal a new command
5. List animals by birth date
6. Filter by kind
7. Delete an animal
8. Edit an animal
9. Show all animals
10. Save to file
11. Exit
";

const DATE_FORMAT: &str = "%Y-%m-%d";

enum Flow {
    Continue,
    Exit,
}

pub struct Shell<'a, S: DataStore, R: BufRead, W: Write> {
    api: &'a mut KennelApi<S>,
    input: R,
    output: W,
    locale: Locale,
    today: NaiveDate,
}

impl<'a, S: DataStore, R: BufRead, W: Write> Shell<'a, S, R, W> {
    pub fn new(
        api: &'a mut KennelApi<S>,
        input: R,
        output: W,
        locale: Locale,
        today: NaiveDate,
    ) -> Self {
        Self {
            api,
            input,
            output,
            locale,
            today,
        }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{}> ", MAIN_MENU)?;
            self.output.flush()?;

            let Some(choice) = self.read_number::<u32>(None)? else {
                return Ok(());
            };

            let flow = match choice {
                1 => self.add_animal()?,
                2 => self.report(|api| api.load())?,
                3 => self.list_commands()?,
                4 => self.train()?,
                5 => self.show_list(|api| api.list_by_birth_date())?,
                6 => self.filter()?,
                7 => self.delete()?,
                8 => self.edit()?,
                9 => self.summary()?,
                10 => self.report(|api| api.save())?,
                11 => Flow::Exit,
                _ => {
                    self.say(CmdMessage::warning("Unknown menu entry."))?;
                    Flow::Continue
                }
            };

            if let Flow::Exit = flow {
                return Ok(());
            }
        }
    }

    // --- Menu entries ---

    fn add_animal(&mut self) -> Result<Flow> {
        let Some(kind) = self.read_kind()? else {
            return Ok(Flow::Exit);
        };
        let Some(kind) = kind else {
            return Ok(Flow::Continue);
        };
        let Some(name) = self.prompt("Name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(birth_date) = self.read_date("Birth date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(commands) = self.prompt("Commands, comma-separated: ")? else {
            return Ok(Flow::Exit);
        };

        let new = NewAnimal::new(kind, name.trim(), birth_date)
            .with_commands(parse_commands(&commands));

        match self.api.add_animal(new.clone(), false) {
            Err(KennelError::DuplicateFound(existing)) => {
                let question = format!(
                    "An identical animal is already registered (id {}). Add anyway? (y/n): ",
                    existing
                );
                let Some(answer) = self.prompt(&question)? else {
                    return Ok(Flow::Exit);
                };
                if is_yes(&answer) {
                    self.report(|api| api.add_animal(new, true))
                } else {
                    self.say(CmdMessage::info("Animal not added."))?;
                    Ok(Flow::Continue)
                }
            }
            other => self.report(|_| other),
        }
    }

    fn list_commands(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number::<u64>(Some("Animal id: "))? else {
            return Ok(Flow::Exit);
        };
        match self.api.list_commands(id) {
            Ok(result) => {
                let text = render_commands(&result.commands, self.locale);
                self.output.write_all(text.as_bytes())?;
            }
            Err(e) => self.say(CmdMessage::error(e.to_string()))?,
        }
        Ok(Flow::Continue)
    }

    fn train(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number::<u64>(Some("Animal id: "))? else {
            return Ok(Flow::Exit);
        };
        if let Err(e) = self.api.registry().find(id) {
            self.say(CmdMessage::error(e.to_string()))?;
            return Ok(Flow::Continue);
        }
        let Some(command) = self.prompt("New command: ")? else {
            return Ok(Flow::Exit);
        };
        self.report(|api| api.train(id, &command))
    }

    fn filter(&mut self) -> Result<Flow> {
        let Some(kind) = self.read_kind()? else {
            return Ok(Flow::Exit);
        };
        let Some(kind) = kind else {
            return Ok(Flow::Continue);
        };
        self.show_list(|api| api.filter_by_kind(kind))
    }

    fn delete(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number::<u64>(Some("Id of the animal to delete: "))? else {
            return Ok(Flow::Exit);
        };
        self.report(|api| api.delete_animal(id))
    }

    fn edit(&mut self) -> Result<Flow> {
        let Some(id) = self.read_number::<u64>(Some("Id of the animal to edit: "))? else {
            return Ok(Flow::Exit);
        };
        let current = match self.api.registry().find(id) {
            Ok(animal) => format_record(animal, self.today, self.locale),
            Err(e) => {
                self.say(CmdMessage::error(e.to_string()))?;
                return Ok(Flow::Continue);
            }
        };
        writeln!(self.output, "{}", current)?;

        let Some(name) = self.prompt("New name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(birth_date) = self.read_date("New birth date (YYYY-MM-DD): ")? else {
            return Ok(Flow::Exit);
        };
        let Some(commands) = self.prompt("New commands, comma-separated: ")? else {
            return Ok(Flow::Exit);
        };

        let update = AnimalUpdate::new(name.trim(), birth_date, parse_commands(&commands));
        self.report(|api| api.edit_animal(id, update))
    }

    fn summary(&mut self) -> Result<Flow> {
        let result = self.api.summary()?;
        let counts = result.counts.unwrap_or_default();
        let text = render_summary(&counts, &result.listed_animals, self.today, self.locale);
        self.output.write_all(text.as_bytes())?;
        Ok(Flow::Continue)
    }

    // --- Plumbing ---

    /// Runs an API call and prints its messages, or its error.
    fn report<F>(&mut self, call: F) -> Result<Flow>
    where
        F: FnOnce(&mut KennelApi<S>) -> Result<CmdResult>,
    {
        match call(&mut *self.api) {
            Ok(result) => {
                let text = render_messages(&result.messages);
                self.output.write_all(text.as_bytes())?;
            }
            Err(e) => self.say(CmdMessage::error(e.to_string()))?,
        }
        Ok(Flow::Continue)
    }

    fn show_list<F>(&mut self, call: F) -> Result<Flow>
    where
        F: FnOnce(&KennelApi<S>) -> Result<CmdResult>,
    {
        match call(&*self.api) {
            Ok(result) => {
                let text = render_animal_list(&result.listed_animals, self.today, self.locale);
                self.output.write_all(text.as_bytes())?;
            }
            Err(e) => self.say(CmdMessage::error(e.to_string()))?,
        }
        Ok(Flow::Continue)
    }

    fn say(&mut self, message: CmdMessage) -> Result<()> {
        self.output
            .write_all(render_messages(&[message]).as_bytes())?;
        Ok(())
    }

    /// Reads one line. `None` means the input is exhausted.
    fn prompt(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Asks until the answer parses.
    fn read_number<T: FromStr>(&mut self, prompt: Option<&str>) -> Result<Option<T>> {
        loop {
            let Some(line) = self.prompt(prompt.unwrap_or(""))? else {
                return Ok(None);
            };
            match line.trim().parse() {
                Ok(n) => return Ok(Some(n)),
                Err(_) => self.say(CmdMessage::warning("Please enter a number."))?,
            }
        }
    }

    fn read_date(&mut self, prompt: &str) -> Result<Option<NaiveDate>> {
        loop {
            let Some(line) = self.prompt(prompt)? else {
                return Ok(None);
            };
            match NaiveDate::parse_from_str(line.trim(), DATE_FORMAT) {
                Ok(date) => return Ok(Some(date)),
                Err(_) => self.say(CmdMessage::warning("Invalid date format. Try again."))?,
            }
        }
    }

    /// Shows the kind menu. The outer `None` is end of input; the inner one is
    /// a choice outside the menu, already reported.
    fn read_kind(&mut self) -> Result<Option<Option<AnimalKind>>> {
        writeln!(self.output, "Choose a kind:")?;
        for (i, kind) in AnimalKind::ALL.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, kind)?;
        }

        let Some(choice) = self.read_number::<u32>(Some("> "))? else {
            return Ok(None);
        };
        match AnimalKind::from_menu_choice(choice) {
            Ok(kind) => Ok(Some(Some(kind))),
            Err(e) => {
                self.say(CmdMessage::warning(e.to_string()))?;
                Ok(Some(None))
            }
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
