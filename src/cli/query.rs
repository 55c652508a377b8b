use crate::cli::commands::QueryArgs;
use crate::errors::DirectoryError;
use crate::models::Report;
use serde::Deserialize;
use tracing::info;

#[derive(Deserialize)]
struct ReportList {
    #[serde(default)]
    data: Vec<Report>,
    #[serde(default)]
    total: usize,
}

pub async fn handle_query(args: QueryArgs) -> Result<(), DirectoryError> {
    let url = format!("{}/api/reports", args.server.trim_end_matches('/'));
    info!(url = %url, group = ?args.group, search = ?args.search, "Querying reports");

    let mut params: Vec<(&str, &str)> = Vec::new();
    if let Some(group) = &args.group {
        params.push(("group", group.as_str()));
    }
    if let Some(search) = &args.search {
        params.push(("search", search.as_str()));
    }

    let client = reqwest::Client::new();
    let resp = client.get(&url).query(&params).send().await
        .map_err(|e| DirectoryError::Network(format!("Failed to query reports: {}", e)))?;

    let status = resp.status();
    let body: serde_json::Value = resp.json().await
        .map_err(|e| DirectoryError::Network(format!("Invalid response: {}", e)))?;

    if !status.is_success() {
        let message = body["error"].as_str().unwrap_or("unknown error");
        return Err(DirectoryError::Network(format!("Server returned {}: {}", status, message)));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&body)?);
        return Ok(());
    }

    let list: ReportList = serde_json::from_value(body)?;
    for report in &list.data {
        println!("{:<24} {}", report.group, report.name);
        println!("{:<24} {}", "", report.url);
    }
    println!("Total: {}", list.total);

    Ok(())
}
