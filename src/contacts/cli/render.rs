//! Terminal output for command results.
//!
//! The contact table is laid out by display width rather than byte or char
//! count, so names in any script stay aligned. Values wider than their column
//! are printed in full and push the row out.

use colored::Colorize;
use contacts::api::CmdResult;
use contacts::index::DisplayContact;
use unicode_width::UnicodeWidthStr;

pub const EMPTY_MESSAGE: &str = "Contact list is empty.";

const INDEX_WIDTH: usize = 4;
const FAMILY_WIDTH: usize = 30;
const NAME_WIDTH: usize = 20;
const NUMBER_WIDTH: usize = 30;
const BORN_WIDTH: usize = 20;

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
    Center,
}

pub fn print_result(result: &CmdResult) {
    if let Some(listed) = &result.listed_contacts {
        print!("{}", render_table(listed));
    }
    print_messages(&result.messages);
}

fn print_messages(messages: &[String]) {
    for message in messages {
        println!("{}", message.green());
    }
}

pub fn print_warning(message: &str) {
    eprintln!("{} {}", "Warning:".yellow(), message);
}

/// Renders contacts as a bordered table, or the empty-list message.
pub fn render_table(contacts: &[DisplayContact]) -> String {
    if contacts.is_empty() {
        return format!("{}\n", EMPTY_MESSAGE);
    }

    let border = border_line();
    let mut out = String::new();
    out.push_str(&border);
    out.push_str(&row_line([
        ("No", INDEX_WIDTH, Align::Center),
        ("Family", FAMILY_WIDTH, Align::Center),
        ("Name", NAME_WIDTH, Align::Center),
        ("Phone number", NUMBER_WIDTH, Align::Center),
        ("Born", BORN_WIDTH, Align::Center),
    ]));
    out.push_str(&border);

    for dc in contacts {
        let index = dc.index.to_string();
        let number = dc.contact.number.to_string();
        out.push_str(&row_line([
            (index.as_str(), INDEX_WIDTH, Align::Right),
            (dc.contact.family.as_str(), FAMILY_WIDTH, Align::Left),
            (dc.contact.name.as_str(), NAME_WIDTH, Align::Left),
            (number.as_str(), NUMBER_WIDTH, Align::Left),
            (dc.contact.born.as_str(), BORN_WIDTH, Align::Right),
        ]));
    }

    out.push_str(&border);
    out
}

fn border_line() -> String {
    let cells: Vec<String> = [INDEX_WIDTH, FAMILY_WIDTH, NAME_WIDTH, NUMBER_WIDTH, BORN_WIDTH]
        .iter()
        .map(|w| "-".repeat(*w))
        .collect();
    format!("+-{}-+\n", cells.join("-+-"))
}

fn row_line(cells: [(&str, usize, Align); 5]) -> String {
    let cells: Vec<String> = cells
        .iter()
        .map(|(text, width, align)| pad(text, *width, *align))
        .collect();
    format!("| {} |\n", cells.join(" | "))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    let fill = width.saturating_sub(text.width());
    match align {
        Align::Left => format!("{}{}", text, " ".repeat(fill)),
        Align::Right => format!("{}{}", " ".repeat(fill), text),
        Align::Center => {
            let left = fill / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(fill - left))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contacts::index::index_contacts;
    use contacts::model::Contact;

    #[test]
    fn empty_list_renders_message_only() {
        assert_eq!(render_table(&[]), "Contact list is empty.\n");
    }

    #[test]
    fn single_contact_renders_one_row_between_borders() {
        let listed = index_contacts(vec![Contact::new("Ivanov", "Petr", 12345, "1990-01-01")]);
        let table = render_table(&listed);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 5);
        assert!(lines[0].starts_with("+-"));
        assert_eq!(lines[0], lines[2]);
        assert_eq!(lines[0], lines[4]);
        assert!(lines[1].contains("Family"));
        assert_eq!(
            lines[3],
            format!(
                "| {:>4} | {:<30} | {:<20} | {:<30} | {:>20} |",
                1, "Ivanov", "Petr", 12345, "1990-01-01"
            )
        );
    }

    #[test]
    fn header_cells_are_centered() {
        let listed = index_contacts(vec![Contact::default()]);
        let table = render_table(&listed);
        let header = table.lines().nth(1).unwrap();
        assert_eq!(
            header,
            format!(
                "| {:^4} | {:^30} | {:^20} | {:^30} | {:^20} |",
                "No", "Family", "Name", "Phone number", "Born"
            )
        );
    }

    #[test]
    fn rows_stay_aligned_with_wide_characters() {
        let listed = index_contacts(vec![
            Contact::new("Иванов", "Пётр", 1, "1990-01-01"),
            Contact::new("山田", "太郎", 2, "2000-02-02"),
            Contact::new("Smith", "John", 3, "1970-07-07"),
        ]);
        let table = render_table(&listed);
        let widths: Vec<usize> = table.lines().map(|l| l.width()).collect();

        assert_eq!(widths.len(), 7);
        assert!(widths.iter().all(|w| *w == widths[0]));
    }

    #[test]
    fn defaulted_record_shows_empty_strings_and_zero() {
        let listed = index_contacts(vec![Contact::default()]);
        let table = render_table(&listed);
        let row = table.lines().nth(3).unwrap();
        assert_eq!(
            row,
            format!(
                "| {:>4} | {:<30} | {:<20} | {:<30} | {:>20} |",
                1, "", "", 0, ""
            )
        );
    }

    #[test]
    fn pad_centers_with_extra_space_on_the_right() {
        assert_eq!(pad("ab", 5, Align::Center), " ab  ");
        assert_eq!(pad("toolong", 3, Align::Left), "toolong");
    }
}
