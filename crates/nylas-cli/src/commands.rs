//! Command implementations.

use nylas::{Client, Query};

use crate::error::{CliError, CliResult};

fn join_senders(from: &[nylas::models::EmailName]) -> String {
    from.iter()
        .map(|p| p.email.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

pub async fn messages(
    client: &Client,
    grant_id: &str,
    unread: bool,
    limit: Option<u32>,
) -> CliResult<()> {
    let filters = if unread {
        Query::new().with("unread", true)
    } else {
        Query::new()
    };
    let mut pages = client.messages(grant_id).all(filters, limit)?;
    while let Some(page) = pages.next_page().await? {
        for message in page.data {
            println!(
                "{}  {:<40}  {}",
                message.id,
                message.subject.as_deref().unwrap_or("(no subject)"),
                join_senders(&message.from),
            );
        }
    }
    Ok(())
}

pub async fn message(client: &Client, grant_id: &str, id: &str) -> CliResult<()> {
    let response = client.messages(grant_id).find(id).await?;
    println!("{}", serde_json::to_string_pretty(&response.data)?);
    Ok(())
}

pub async fn threads(client: &Client, grant_id: &str, limit: Option<u32>) -> CliResult<()> {
    let mut pages = client.threads(grant_id).all(Query::new(), limit)?;
    while let Some(page) = pages.next_page().await? {
        for thread in page.data {
            println!(
                "{}  {}",
                thread.id,
                thread.subject.as_deref().unwrap_or("(no subject)")
            );
        }
    }
    Ok(())
}

pub async fn events(
    client: &Client,
    grant_id: &str,
    calendar_id: &str,
    limit: Option<u32>,
) -> CliResult<()> {
    let mut pages = client
        .events(grant_id)
        .all(calendar_id, Query::new(), limit)?;
    while let Some(page) = pages.next_page().await? {
        for event in page.data {
            println!(
                "{}  [{}]  {}",
                event.id,
                event.when.object(),
                event.title.as_deref().unwrap_or("(untitled)")
            );
        }
    }
    Ok(())
}

pub async fn calendars(client: &Client, grant_id: &str) -> CliResult<()> {
    let page = client.calendars(grant_id).list(Query::new()).await?;
    for calendar in page.data {
        let marker = if calendar.is_primary { "*" } else { " " };
        println!("{marker} {}  {}", calendar.id, calendar.name);
    }
    Ok(())
}

pub async fn contacts(client: &Client, grant_id: &str, limit: Option<u32>) -> CliResult<()> {
    let mut pages = client.contacts(grant_id).all(Query::new(), limit)?;
    while let Some(page) = pages.next_page().await? {
        for contact in page.data {
            let name = [contact.given_name.as_deref(), contact.surname.as_deref()]
                .into_iter()
                .flatten()
                .collect::<Vec<_>>()
                .join(" ");
            let email = contact
                .emails
                .first()
                .map(|e| e.email.as_str())
                .unwrap_or("");
            println!("{}  {:<30}  {}", contact.id, name, email);
        }
    }
    Ok(())
}

pub async fn folders(client: &Client, grant_id: &str) -> CliResult<()> {
    let page = client.folders(grant_id).list(Query::new()).await?;
    for folder in page.data {
        let unread = folder
            .unread_count
            .map(|n| format!(" ({n} unread)"))
            .unwrap_or_default();
        println!("{}  {}{}", folder.id, folder.name, unread);
    }
    Ok(())
}

pub async fn grants(client: &Client, limit: Option<u32>) -> CliResult<()> {
    let mut pages = client.grants().all(Query::new(), limit)?;
    while let Some(page) = pages.next_page().await? {
        for grant in page.data {
            println!(
                "{}  {:<10}  {}  {}",
                grant.id,
                grant.provider,
                grant.email.as_deref().unwrap_or("-"),
                grant.grant_status.as_deref().unwrap_or("-"),
            );
        }
    }
    Ok(())
}

/// Resolves the grant id required by account-scoped commands.
pub fn require_grant(grant_id: Option<&str>) -> CliResult<&str> {
    grant_id.ok_or_else(|| {
        CliError::Usage("this command needs a grant id (--grant-id or NYLAS_GRANT_ID)".into())
    })
}
