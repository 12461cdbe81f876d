use crate::config::cli::{BookmarkCommand, CollageCommand, Command, ForumCommand, SubscriptionTarget};
use crate::core::{ApiClient, Transport};
use crate::domain::model::collage::SearchCollagesQuery;
use crate::domain::model::forum::{ForumSearchQuery, GetForumThreadPostsQuery};
use crate::utils::error::Result;
use serde_json::Value;

/// Runs one CLI command against the API and returns the decoded response
/// re-encoded as JSON for printing.
pub async fn execute<T: Transport>(client: &ApiClient<T>, command: &Command) -> Result<Value> {
    match command {
        Command::Collage(cmd) => collage(client, cmd).await,
        Command::Forum(cmd) => forum(client, cmd).await,
        Command::Notifications { include_read } => to_json(
            client
                .get_notifications_forum_thread_posts(*include_read)
                .await?,
        ),
        Command::Subscribe(SubscriptionTarget::TitleGroup { id }) => {
            client.subscribe_to_title_group_torrents(*id).await
        }
        Command::Subscribe(SubscriptionTarget::ForumThread { id }) => {
            client.subscribe_to_forum_thread_posts(*id).await
        }
        Command::Unsubscribe(SubscriptionTarget::TitleGroup { id }) => {
            client.unsubscribe_to_title_group_torrents(*id).await
        }
        Command::Unsubscribe(SubscriptionTarget::ForumThread { id }) => {
            client.unsubscribe_to_forum_thread_posts(*id).await
        }
        Command::Bookmark(BookmarkCommand::Get { id }) => to_json(client.get_bookmark(*id).await?),
        Command::Bookmark(BookmarkCommand::Remove { id }) => client.remove_bookmark(*id).await,
        Command::TitleGroupBookmark(BookmarkCommand::Get { id }) => {
            to_json(client.get_title_group_bookmark(*id).await?)
        }
        Command::TitleGroupBookmark(BookmarkCommand::Remove { id }) => {
            client.remove_title_group_bookmark(*id).await
        }
    }
}

async fn collage<T: Transport>(client: &ApiClient<T>, command: &CollageCommand) -> Result<Value> {
    match command {
        CollageCommand::Get { id } => to_json(client.get_collage(*id).await?),
        CollageCommand::Search(args) => {
            let query = SearchCollagesQuery {
                name: args.name.clone(),
                tags: (!args.tags.is_empty()).then(|| args.tags.clone()),
                page: args.page,
                page_size: args.page_size,
            };
            to_json(client.search_collages(&query).await?)
        }
    }
}

async fn forum<T: Transport>(client: &ApiClient<T>, command: &ForumCommand) -> Result<Value> {
    match command {
        ForumCommand::Overview => to_json(client.get_forum().await?),
        ForumCommand::SubCategory { id } => to_json(client.get_forum_sub_category(*id).await?),
        ForumCommand::Threads { id } => to_json(client.get_forum_threads(*id).await?),
        ForumCommand::Thread { id } => to_json(client.get_forum_thread(*id).await?),
        ForumCommand::Posts {
            thread_id,
            page_size,
            page,
            post_id,
        } => {
            let query = GetForumThreadPostsQuery {
                thread_id: *thread_id,
                page: *page,
                page_size: *page_size,
                post_id: *post_id,
            };
            to_json(client.get_forum_thread_posts(&query).await?)
        }
        ForumCommand::Search {
            thread_name,
            page,
            page_size,
        } => {
            let query = ForumSearchQuery {
                thread_name: thread_name.clone(),
                page: *page,
                page_size: *page_size,
            };
            to_json(client.search_forum(&query).await?)
        }
    }
}

fn to_json<R: serde::Serialize>(value: R) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}
