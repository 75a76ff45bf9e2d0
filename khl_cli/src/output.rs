use anyhow::Result;
use khl_api::types::PageInfo;
use serde::Serialize;

pub fn print_json<T: Serialize>(data: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(data)?);
    Ok(())
}

#[derive(Serialize)]
struct Page<'a, T> {
    items: &'a [T],
    meta: &'a PageInfo,
}

/// Prints a list result together with its page metadata.
pub fn print_page<T: Serialize>(items: &[T], meta: &PageInfo) -> Result<()> {
    print_json(&Page { items, meta })
}
