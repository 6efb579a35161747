use chrono::Utc;

use crate::app::{AppContext, Result};

pub async fn chapter(ctx: &AppContext, book: &str, chapter: u32, version: &str) -> Result<()> {
    let resolved = ctx.resolver.resolve(book, chapter, version).await?;

    println!(
        "{} {} ({}) [{}]",
        resolved.book, resolved.chapter, resolved.version, resolved.source
    );
    for verse in &resolved.verses {
        println!("{:>3}  {}", verse.verse, verse.text);
    }
    println!("{} verses", resolved.total_verses);

    Ok(())
}

pub async fn search(
    ctx: &AppContext,
    query: &str,
    version: &str,
    book: Option<&str>,
) -> Result<()> {
    let results = ctx.search.search(query, version, book).await?;

    if results.is_empty() {
        println!("No matches for \"{}\"", query);
        return Ok(());
    }

    for result in &results {
        println!(
            "{} {}:{}  {}",
            result.book, result.chapter, result.verse, result.text
        );
    }
    println!("{} result(s)", results.len());

    Ok(())
}

pub async fn votd(ctx: &AppContext) -> Result<()> {
    let verse = ctx.votd.select(Utc::now().date_naive()).await;

    println!("{}", verse.reference);
    println!("{}", verse.text);
    println!("({}, via {})", verse.version, verse.source);

    Ok(())
}
