use clutch_api::model::{MatchRecord, PlayerIdentity, Region};
use clutch_api::{ApiError, ValorantApi};
use clutch_store::LinkStore;
use std::sync::Arc;

mod help;
mod leaderboard;
mod linkacc;
mod matches;
mod rank;
mod stats;
mod unlinkacc;

pub use help::help;
pub use leaderboard::leaderboard;
pub use linkacc::linkacc;
pub use matches::matches;
pub use rank::rank;
pub use stats::stats;
pub use unlinkacc::unlinkacc;

pub type CommandError = Box<dyn std::error::Error + Send + Sync>;

pub struct Data {
    pub api: ValorantApi,
    pub link_store: Arc<dyn LinkStore>,
    pub default_region: Region,
}

// Embed accent colors shared across commands.
pub const BLURPLE: u32 = 0x5865F2;
pub const WIN_GREEN: u32 = 0x00D26A;
pub const LOSS_RED: u32 = 0xFD4556;
pub const GOLD: u32 = 0xFFD700;

/// How far back the stats/matches commands look.
pub const ACT_MATCH_COUNT: usize = 10;

/// Resolve the target player from explicit arguments or the caller's linked
/// account. Replies to the user and returns `Ok(None)` when neither gives a
/// complete identity.
pub async fn resolve_identity(
    ctx: poise::Context<'_, Data, CommandError>,
    name: Option<String>,
    tag: Option<String>,
    region: Option<String>,
) -> Result<Option<PlayerIdentity>, CommandError> {
    let region = match region.as_deref().map(str::parse::<Region>).transpose() {
        Ok(region) => region,
        Err(e) => {
            ctx.reply(format!("❌ {e}")).await?;
            return Ok(None);
        }
    };

    if let (Some(name), Some(tag)) = (&name, &tag) {
        return Ok(Some(PlayerIdentity {
            name: name.clone(),
            tag: tag.clone(),
            region: region.unwrap_or(ctx.data().default_region),
        }));
    }

    match ctx.data().link_store.get(ctx.author().id.get()).await? {
        Some(linked) => Ok(Some(PlayerIdentity {
            name: name.unwrap_or(linked.name),
            tag: tag.unwrap_or(linked.tag),
            region: region.unwrap_or(linked.region),
        })),
        None => {
            ctx.reply(
                "❌ No account linked! Use `/linkacc` to link your account or provide name and tag.",
            )
            .await?;
            Ok(None)
        }
    }
}

/// Last competitive matches restricted to the player's current act.
pub async fn fetch_act_matches(
    api: &ValorantApi,
    identity: &PlayerIdentity,
) -> Result<Option<Vec<MatchRecord>>, ApiError> {
    let history = api
        .match_history(
            identity.region,
            &identity.name,
            &identity.tag,
            "competitive",
            ACT_MATCH_COUNT,
        )
        .await?;
    Ok(history.map(clutch_stats::filter_current_act))
}
