//! Post command handlers.

use anyhow::Result;
use postboard_core::api::{Post, PostPatch, format_timestamp};
use postboard_core::feed::{Action, Outcome, PendingDelete};

use super::{Session, confirm};

pub async fn list(session: &Session) -> Result<()> {
    session.require_login()?;
    if let Outcome::Posts(posts) = session.perform(&Action::ListPosts).await? {
        print_posts(&posts);
    }
    Ok(())
}

pub async fn show(session: &Session, id: i64) -> Result<()> {
    session.require_login()?;
    if let Outcome::Post(post) = session.perform(&Action::ShowPost { id }).await? {
        println!("{}", post_header(&post));
        if let Some(user_id) = post.user_id {
            println!("author: {user_id}");
        }
        if let Some(updated) = post.updated_at.as_deref().and_then(format_timestamp) {
            println!("updated: {updated}");
        }
        println!();
        println!("{}", post.content);
    }
    Ok(())
}

pub async fn create(session: &Session, title: &str, content: &str) -> Result<()> {
    session.require_login()?;
    let outcome = session.perform(&Action::create_post(title, content)).await?;
    println!("Post created.");
    print_refreshed(outcome);
    Ok(())
}

pub async fn edit(
    session: &Session,
    id: i64,
    title: Option<String>,
    content: Option<String>,
) -> Result<()> {
    let patch = PostPatch { title, content };
    if patch.is_empty() {
        anyhow::bail!("Nothing to update: pass --title and/or --content");
    }
    session.require_login()?;
    let outcome = session.perform(&Action::EditPost { id, patch }).await?;
    println!("Post #{id} updated.");
    print_refreshed(outcome);
    Ok(())
}

/// Deletes after a `[y/N]` prompt; declining makes no request at all.
pub async fn delete(session: &Session, id: i64, yes: bool) -> Result<()> {
    session.require_login()?;
    let pending = PendingDelete::new(id, format!("post #{id}"));
    if !yes && !confirm(&pending.prompt())? {
        println!("Delete cancelled.");
        return Ok(());
    }

    let outcome = session.perform(&pending.confirm()).await?;
    println!("Post #{id} deleted.");
    print_refreshed(outcome);
    Ok(())
}

pub async fn like(session: &Session, id: i64) -> Result<()> {
    session.require_login()?;
    let outcome = session.perform(&Action::Like { id }).await?;
    report_likes("Liked", id, &outcome);
    Ok(())
}

pub async fn unlike(session: &Session, id: i64) -> Result<()> {
    session.require_login()?;
    let outcome = session.perform(&Action::Unlike { id }).await?;
    report_likes("Unliked", id, &outcome);
    Ok(())
}

fn report_likes(verb: &str, id: i64, outcome: &Outcome) {
    let likes = match outcome {
        Outcome::Mutated {
            refreshed: Some(posts),
        } => posts.iter().find(|p| p.post_id == id).map(|p| p.likes_count),
        _ => None,
    };
    match likes {
        Some(count) => println!("{verb} post #{id} (👍 {count})"),
        None => println!("{verb} post #{id}"),
    }
}

/// Prints the list fetched after a mutation, if the refresh succeeded.
fn print_refreshed(outcome: Outcome) {
    if let Outcome::Mutated {
        refreshed: Some(posts),
    } = outcome
    {
        println!();
        print_posts(&posts);
    }
}

fn post_header(post: &Post) -> String {
    let mut header = format!("#{}  {}  (👍 {})", post.post_id, post.title, post.likes_count);
    if let Some(created) = post.created_display() {
        header.push_str(&format!("  {created}"));
    }
    header
}

fn print_posts(posts: &[Post]) {
    if posts.is_empty() {
        println!("No posts yet.");
        return;
    }
    for post in posts {
        println!("{}", post_header(post));
        for line in post.content.lines() {
            println!("    {line}");
        }
    }
}
