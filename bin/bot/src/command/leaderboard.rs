use crate::command::{CommandError, Data, GOLD};
use clutch_api::model::PlayerIdentity;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;
use tokio_stream::StreamExt;
use tracing::warn;

const LEADERBOARD_SIZE: usize = 15;
const MEDALS: [&str; 3] = ["🥇", "🥈", "🥉"];

struct LeaderboardEntry {
    discord_name: String,
    identity: PlayerIdentity,
    tier: i64,
    rank: String,
    rr: i64,
}

/// Shows a leaderboard of all linked accounts sorted by rank
#[poise::command(slash_command)]
pub async fn leaderboard(ctx: poise::Context<'_, Data, CommandError>) -> Result<(), CommandError> {
    ctx.defer().await?;

    let accounts = ctx.data().link_store.list_all().await?;
    if accounts.is_empty() {
        ctx.reply(
            "❌ No linked accounts found! Users need to link their accounts with `/linkacc` first.",
        )
        .await?;
        return Ok(());
    }

    // One rank fetch per linked account; entries that fail resolve to None
    // and drop off the board instead of sinking the whole command.
    let entries = tokio_stream::iter(accounts).then(|(user_id, identity)| async move {
        let discord_name = match ctx.http().get_user(user_id.into()).await {
            Ok(user) => user.name,
            Err(_) => "Unknown".to_string(),
        };
        match ctx
            .data()
            .api
            .mmr(identity.region, &identity.name, &identity.tag)
            .await
        {
            Ok(Some(mmr)) => {
                let current = mmr.current_data;
                Some(LeaderboardEntry {
                    discord_name,
                    identity,
                    tier: current.currenttier,
                    rank: current
                        .currenttierpatched
                        .unwrap_or_else(|| "Unranked".to_string()),
                    rr: current.ranking_in_tier,
                })
            }
            Ok(None) => None,
            Err(e) => {
                warn!("Skipping {identity} on leaderboard: {e}");
                None
            }
        }
    });
    tokio::pin!(entries);

    let mut board = Vec::new();
    while let Some(entry) = entries.next().await {
        if let Some(entry) = entry {
            board.push(entry);
        }
    }

    if board.is_empty() {
        ctx.reply("❌ Could not fetch rank data for any linked accounts.")
            .await?;
        return Ok(());
    }

    board.sort_by(|a, b| (b.tier, b.rr).cmp(&(a.tier, a.rr)));

    let mut embed = CreateEmbed::new()
        .title("🏆 Server Leaderboard")
        .description(format!(
            "Ranked leaderboard of {} linked accounts",
            board.len()
        ))
        .color(GOLD)
        .timestamp(Timestamp::now());

    for (index, entry) in board.iter().take(LEADERBOARD_SIZE).enumerate() {
        let medal = MEDALS
            .get(index)
            .map(|medal| medal.to_string())
            .unwrap_or_else(|| format!("**{}.**", index + 1));
        embed = embed.field(
            format!("{medal} {}", entry.discord_name),
            format!(
                "**{}** ({} RR)\n`{}`",
                entry.rank, entry.rr, entry.identity
            ),
            false,
        );
    }

    let footer = if board.len() > LEADERBOARD_SIZE {
        format!("Showing top {LEADERBOARD_SIZE} of {} players", board.len())
    } else {
        format!("Total: {} players", board.len())
    };
    embed = embed.footer(CreateEmbedFooter::new(footer));

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
