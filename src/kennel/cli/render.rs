//! # Rendering Module
//!
//! Turns records and command results into terminal text. Everything here is
//! presentation only: the localized unit words, kind labels and the grouping
//! of the summary never feed back into the registry.

use chrono::NaiveDate;
use colored::Colorize;
use kennel::age::Age;
use kennel::api::{CmdMessage, MessageLevel};
use kennel::config::{KennelConfig, Locale};
use kennel::model::{AnimalKind, AnimalRecord, Category};
use kennel::registry::CategoryCounts;

const SUMMARY_INDENT: &str = "      ";

/// Picks the Russian noun form for `n`: one (1, 21, 101...), few (2-4, 22-24...)
/// or many (everything else, including 11-14).
fn russian_plural<'a>(n: u32, one: &'a str, few: &'a str, many: &'a str) -> &'a str {
    let (last, last_two) = (n % 10, n % 100);
    if last == 1 && last_two != 11 {
        one
    } else if (2..=4).contains(&last) && !(12..=14).contains(&last_two) {
        few
    } else {
        many
    }
}

fn year_word(n: u32, locale: Locale) -> &'static str {
    match locale {
        Locale::En if n == 1 => "year",
        Locale::En => "years",
        Locale::Ru => russian_plural(n, "год", "года", "лет"),
    }
}

fn month_word(n: u32, locale: Locale) -> &'static str {
    match locale {
        Locale::En if n == 1 => "month",
        Locale::En => "months",
        Locale::Ru => russian_plural(n, "месяц", "месяца", "месяцев"),
    }
}

fn kind_label(kind: AnimalKind, locale: Locale) -> &'static str {
    match locale {
        Locale::En => kind.label(),
        Locale::Ru => match kind {
            AnimalKind::Dog => "Собака",
            AnimalKind::Cat => "Кот(кошка)",
            AnimalKind::Hamster => "Хомяк",
            AnimalKind::Horse => "Лошадь",
            AnimalKind::Camel => "Верблюд",
            AnimalKind::Donkey => "Осёл",
        },
    }
}

/// Heading used for a kind's group in the summary.
fn kind_group_label(kind: AnimalKind, locale: Locale) -> &'static str {
    match (locale, kind) {
        (Locale::En, AnimalKind::Dog) => "Dogs",
        (Locale::En, AnimalKind::Cat) => "Cats",
        (Locale::En, AnimalKind::Hamster) => "Hamsters",
        (Locale::En, AnimalKind::Horse) => "Horses",
        (Locale::En, AnimalKind::Camel) => "Camels",
        (Locale::En, AnimalKind::Donkey) => "Donkeys",
        (Locale::Ru, AnimalKind::Dog) => "Собак",
        (Locale::Ru, AnimalKind::Cat) => "Кошек",
        (Locale::Ru, AnimalKind::Hamster) => "Хомяков",
        (Locale::Ru, AnimalKind::Horse) => "Лошадей",
        (Locale::Ru, AnimalKind::Camel) => "Верблюдов",
        (Locale::Ru, AnimalKind::Donkey) => "Ослов",
    }
}

fn category_group_label(category: Category, locale: Locale) -> &'static str {
    match (locale, category) {
        (Locale::En, Category::Pet) => "Pets",
        (Locale::En, Category::PackAnimal) => "Pack animals",
        (Locale::Ru, Category::Pet) => "Домашних",
        (Locale::Ru, Category::PackAnimal) => "Вьючных",
    }
}

fn join_commands(commands: &[String], locale: Locale) -> String {
    if commands.is_empty() {
        match locale {
            Locale::En => "(none)".to_string(),
            Locale::Ru => "(нет)".to_string(),
        }
    } else {
        commands.join(", ")
    }
}

pub fn format_age(age: Age, locale: Locale) -> String {
    let and = match locale {
        Locale::En => "and",
        Locale::Ru => "и",
    };
    format!(
        "{} {} {} {} {}",
        age.years,
        year_word(age.years, locale),
        and,
        age.months,
        month_word(age.months, locale)
    )
}

/// One line per animal: id, kind, name, birth date, age and commands.
pub fn format_record(animal: &AnimalRecord, today: NaiveDate, locale: Locale) -> String {
    let age = format_age(Age::between(animal.birth_date, today), locale);
    let (born, commands) = match locale {
        Locale::En => ("born", "commands"),
        Locale::Ru => ("рожд.", "команды"),
    };
    format!(
        "{}. {} {}, {} {} ({}), {}: {}",
        animal.id(),
        kind_label(animal.kind(), locale),
        animal.name,
        born,
        animal.birth_date.format("%Y-%m-%d"),
        age,
        commands,
        join_commands(&animal.commands, locale)
    )
}

pub fn render_animal_list(animals: &[AnimalRecord], today: NaiveDate, locale: Locale) -> String {
    if animals.is_empty() {
        return "No animals found.\n".to_string();
    }
    animals
        .iter()
        .map(|a| format!("{}\n", format_record(a, today, locale)))
        .collect()
}

pub fn render_commands(commands: &[String], locale: Locale) -> String {
    let label = match locale {
        Locale::En => "Commands",
        Locale::Ru => "Команды",
    };
    format!("{}: {}\n", label, join_commands(commands, locale))
}

/// The categorized report: total, then each category and kind with its
/// animals. Groups with nobody in them are left out.
pub fn render_summary(
    counts: &CategoryCounts,
    animals: &[AnimalRecord],
    today: NaiveDate,
    locale: Locale,
) -> String {
    if counts.total == 0 {
        return match locale {
            Locale::En => "No animals registered.\n".to_string(),
            Locale::Ru => "Нет зарегистрированных животных.\n".to_string(),
        };
    }

    let total_label = match locale {
        Locale::En => "Total animals",
        Locale::Ru => "Всего животных",
    };
    let mut output = format!("{}: {}\n", total_label, counts.total);

    for category in [Category::Pet, Category::PackAnimal] {
        let in_category = counts.category(category);
        if in_category == 0 {
            continue;
        }
        output.push_str(&format!(
            "  {}: {}\n",
            category_group_label(category, locale),
            in_category
        ));

        for kind in AnimalKind::ALL.iter().filter(|k| k.category() == category) {
            let in_kind = counts.kind(*kind);
            if in_kind == 0 {
                continue;
            }
            output.push_str(&format!(
                "    {}: {}\n",
                kind_group_label(*kind, locale),
                in_kind
            ));
            for animal in animals.iter().filter(|a| a.kind() == *kind) {
                output.push_str(SUMMARY_INDENT);
                output.push_str(&format_record(animal, today, locale));
                output.push('\n');
            }
        }
    }
    output
}

pub fn render_config(config: &KennelConfig) -> String {
    config
        .list_all()
        .into_iter()
        .map(|(k, v)| format!("{} = {}\n", k, v))
        .collect()
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn print_messages(messages: &[CmdMessage]) {
    print!("{}", render_messages(messages));
}
