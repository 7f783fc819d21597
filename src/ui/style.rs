use console::style;
use std::fmt::Display;

use crate::core::coherence::Severity;
use crate::core::quality::{Grade, QuickRating};

/// Green bold: success checkmarks, confirmations
pub fn success<D: Display>(text: D) -> String {
    style(text).green().bold().to_string()
}

/// White bold: section headers, titles
pub fn header<D: Display>(text: D) -> String {
    style(text).white().bold().to_string()
}

/// Dim: secondary text, optional fields
pub fn dim<D: Display>(text: D) -> String {
    style(text).dim().to_string()
}

/// Green: identifiers, values
pub fn value<D: Display>(text: D) -> String {
    style(text).green().to_string()
}

/// Cyan bold: bullets, counts
pub fn accent<D: Display>(text: D) -> String {
    style(text).cyan().bold().to_string()
}

/// Severity tag coloured by how serious it is.
pub fn severity(level: Severity) -> String {
    let tag = format!("[{level}]");
    match level {
        Severity::High => style(tag).red().bold().to_string(),
        Severity::Medium => style(tag).yellow().to_string(),
        Severity::Low => style(tag).dim().to_string(),
    }
}

/// Letter grade coloured from green (A) to red (F).
pub fn grade(grade: Grade) -> String {
    match grade {
        Grade::A => style(grade).green().bold().to_string(),
        Grade::B => style(grade).green().to_string(),
        Grade::C => style(grade).yellow().to_string(),
        Grade::D => style(grade).yellow().bold().to_string(),
        Grade::F => style(grade).red().bold().to_string(),
    }
}

pub fn rating(rating: QuickRating) -> String {
    match rating {
        QuickRating::Excellent => style(rating).green().bold().to_string(),
        QuickRating::Good => style(rating).green().to_string(),
        QuickRating::Fair => style(rating).yellow().to_string(),
        QuickRating::Poor => style(rating).red().to_string(),
    }
}
