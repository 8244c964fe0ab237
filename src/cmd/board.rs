//! Board fetch and render — `tix board`.

use anyhow::Result;

use tix::api::fetch_board;
use tix::board::build_board;
use tix::models::{GroupBy, SortBy};
use tix::prefs::{ViewPrefs, prefs_path};
use tix::ui::{FetchStatus, render_board};

pub async fn cmd_board(
    group_by: Option<GroupBy>,
    sort_by: Option<SortBy>,
    endpoint: &str,
    json: bool,
) -> Result<()> {
    let path = prefs_path()?;
    let mut prefs = ViewPrefs::load_or_default(&path);
    // An explicit selection is persisted before the fetch; a failed fetch
    // does not lose the choice.
    if prefs.apply(group_by, sort_by) {
        prefs.save(&path)?;
    }

    if json {
        // No spinner in JSON mode; stdout stays machine-readable.
        let data = fetch_board(endpoint).await?;
        let columns = build_board(&data.tickets, &data.users, prefs.group_by, prefs.sort_by);
        let doc = serde_json::json!({
            "group_by": prefs.group_by.as_str(),
            "sort_by": prefs.sort_by.as_str(),
            "columns": columns,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
        return Ok(());
    }

    let status = FetchStatus::start(endpoint);
    match fetch_board(endpoint).await {
        Ok(data) => {
            status.ready();
            let columns = build_board(&data.tickets, &data.users, prefs.group_by, prefs.sort_by);
            render_board(&columns, &data.users, prefs.group_by, prefs.sort_by);
            Ok(())
        }
        Err(err) => {
            status.error("Failed to load board");
            Err(err.into())
        }
    }
}
