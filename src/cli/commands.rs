use crate::app::{AppContext, Result};
use crate::service::HomeFeed;

pub async fn show_home(ctx: &AppContext, pages: u32) -> Result<()> {
    let mut feed = HomeFeed::new(ctx.home_api.clone());

    feed.load_home_sections().await;
    if let Some(message) = feed.error_message() {
        println!("Failed to load home feed: {}", message);
        return Ok(());
    }

    for _ in 1..pages {
        if !feed.has_more_pages() {
            break;
        }
        feed.load_next_page().await;
    }

    if feed.sections().is_empty() {
        println!("No sections returned");
        return Ok(());
    }

    for section in feed.sections() {
        println!(
            "[{}] {} ({:?}, {} items)",
            section.order,
            section.name,
            section.layout,
            section.content.len()
        );
        for item in &section.content {
            println!("    {} ({}s, score {})", item.name(), item.duration(), item.score());
        }
    }

    if feed.has_more_pages() {
        println!("More pages available (next: {})", feed.next_page());
    }

    Ok(())
}

pub async fn run_search(ctx: &AppContext, query: &str) -> Result<()> {
    let service = ctx.search_service();
    service.perform_search(query).await;

    let state = service.snapshot();
    if let Some(message) = state.error_message {
        println!("Search failed: {}", message);
        return Ok(());
    }
    if !state.has_searched {
        println!("Nothing to search for");
        return Ok(());
    }
    if state.results.is_empty() {
        println!("No results for '{}'", query);
        return Ok(());
    }

    for section in &state.results {
        println!("{} ({} items)", section.name, section.content.len());
        for item in &section.content {
            println!("    {} ({}s)", item.name, item.duration);
        }
    }

    Ok(())
}
