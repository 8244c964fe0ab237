//! Grouping and sorting: the view-model transformation between the fetched
//! collections and the rendered columns.

use std::cmp::Ordering;

use serde::Serialize;

use crate::models::{GroupBy, SortBy, Ticket, User};

/// Bucket name used when a ticket's user id matches no known user.
pub const UNASSIGNED: &str = "Unassigned";

/// One board column: a bucket name plus the tickets that landed in it.
#[derive(Debug, Clone, Serialize)]
pub struct Column {
    pub title: String,
    pub tickets: Vec<Ticket>,
}

/// Partition tickets into columns keyed by the grouping mode, then order each
/// column by the sorting mode.
///
/// Column order is first-seen order over the ticket collection; no column is
/// created for a key that never occurs.
pub fn build_board(
    tickets: &[Ticket],
    users: &[User],
    group_by: GroupBy,
    sort_by: SortBy,
) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();
    for ticket in tickets {
        let key = bucket_key(ticket, users, group_by);
        match columns.iter_mut().find(|c| c.title == key) {
            Some(column) => column.tickets.push(ticket.clone()),
            None => columns.push(Column {
                title: key,
                tickets: vec![ticket.clone()],
            }),
        }
    }
    for column in &mut columns {
        sort_tickets(&mut column.tickets, sort_by);
    }
    columns
}

fn bucket_key(ticket: &Ticket, users: &[User], group_by: GroupBy) -> String {
    match group_by {
        GroupBy::Status => ticket.status.clone(),
        // Linear scan by id equality; the user collection is small.
        GroupBy::Assignee => users
            .iter()
            .find(|user| user.id == ticket.user_id)
            .map(|user| user.name.clone())
            .unwrap_or_else(|| UNASSIGNED.to_string()),
        GroupBy::Priority => ticket.priority.label().to_string(),
    }
}

/// Order tickets in place. Both modes use a stable sort, so priority ties
/// keep their fetch order.
pub fn sort_tickets(tickets: &mut [Ticket], sort_by: SortBy) {
    match sort_by {
        SortBy::Priority => tickets.sort_by(|a, b| b.priority.cmp(&a.priority)),
        SortBy::Title => tickets.sort_by(|a, b| title_cmp(&a.title, &b.title)),
    }
}

/// Case-insensitive title ordering with a case-sensitive tiebreak.
pub fn title_cmp(a: &str, b: &str) -> Ordering {
    let folded = a.to_lowercase().cmp(&b.to_lowercase());
    if folded == Ordering::Equal {
        a.cmp(b)
    } else {
        folded
    }
}
