//! Board rendering.
//!
//! Columns print top to bottom in bucket order, each card as an indented
//! two-line block. All colour goes through `console::style`, so output
//! degrades to plain text when stdout is not a terminal.

use console::{Style, style};

use crate::board::Column;
use crate::models::{GroupBy, Priority, SortBy, Ticket, User};

use super::icons::{BOARD, DOT_OFF, DOT_ON};

/// Colour used for a priority marker and label.
fn priority_style(priority: Priority) -> Style {
    match priority {
        Priority::Urgent => Style::new().red().bold(),
        Priority::High => Style::new().color256(208),
        Priority::Medium => Style::new().yellow(),
        Priority::Low => Style::new().green(),
        Priority::NoPriority => Style::new().dim(),
    }
}

/// Linear scan over the user collection by id equality.
pub fn assignee_name<'a>(users: &'a [User], user_id: &str) -> Option<&'a User> {
    users.iter().find(|user| user.id == user_id)
}

pub fn render_board(columns: &[Column], users: &[User], group_by: GroupBy, sort_by: SortBy) {
    println!();
    println!(
        "{}Kanban Board {}",
        BOARD,
        style(format!(
            "(grouped by {}, sorted by {})",
            group_by.as_str(),
            sort_by.as_str()
        ))
        .dim()
    );
    println!();

    if columns.is_empty() {
        println!("No tickets on the board.");
        println!();
        return;
    }

    for column in columns {
        println!(
            "{} {}",
            style(&column.title).bold().underlined(),
            style(format!("({})", column.tickets.len())).dim()
        );
        for ticket in &column.tickets {
            render_card(ticket, users, group_by);
        }
        println!();
    }
}

fn render_card(ticket: &Ticket, users: &[User], group_by: GroupBy) {
    let marker = priority_style(ticket.priority).apply_to("▍");
    println!(
        "  {} {}  {}",
        marker,
        style(&ticket.id).dim(),
        ticket.title
    );

    let mut details: Vec<String> = Vec::new();
    if group_by != GroupBy::Priority {
        details.push(
            priority_style(ticket.priority)
                .apply_to(ticket.priority.label())
                .to_string(),
        );
    }
    if group_by != GroupBy::Assignee {
        match assignee_name(users, &ticket.user_id) {
            Some(user) => {
                let dot = if user.available { DOT_ON } else { DOT_OFF };
                details.push(format!("{} {}", dot, user.name));
            }
            None => details.push(crate::board::UNASSIGNED.to_string()),
        }
    }
    for tag in &ticket.tag {
        details.push(style(tag).cyan().to_string());
    }

    if !details.is_empty() {
        println!("      {}", details.join("  "));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, available: bool) -> User {
        User {
            id: id.to_string(),
            name: name.to_string(),
            available,
        }
    }

    #[test]
    fn test_assignee_name_finds_matching_id() {
        let users = vec![user("u1", "Anoop Sharma", true), user("u2", "Yogesh", false)];
        assert_eq!(assignee_name(&users, "u2").unwrap().name, "Yogesh");
    }

    #[test]
    fn test_assignee_name_unknown_id_is_none() {
        let users = vec![user("u1", "Anoop Sharma", true)];
        assert!(assignee_name(&users, "ghost").is_none());
    }

    #[test]
    fn test_assignee_name_empty_collection() {
        assert!(assignee_name(&[], "u1").is_none());
    }
}
