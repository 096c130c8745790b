use crate::command::{resolve_identity, CommandError, Data};
use clutch_api::model::{MmrData, PlayerIdentity};
use clutch_stats::{display_season, rank_color};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;
use tracing::debug;

// Tier icons for past episodes are not part of the MMR payload, but the
// media CDN serves them by tier id under the current episode's UUID.
const TIER_ICON_BASE: &str =
    "https://media.valorant-api.com/competitivetiers/03621f52-342b-cf4e-4f86-9350a49c6d04";

/// Shows current rank and RR of the player
#[poise::command(slash_command)]
pub async fn rank(
    ctx: poise::Context<'_, Data, CommandError>,
    #[description = "Riot ID Name (optional if account is linked)"] name: Option<String>,
    #[description = "Riot ID Tag (optional if account is linked)"] tag: Option<String>,
    #[description = "Region (eu, na, ap, kr)"] region: Option<String>,
) -> Result<(), CommandError> {
    ctx.defer().await?;

    let Some(identity) = resolve_identity(ctx, name, tag, region).await? else {
        return Ok(());
    };
    let api = &ctx.data().api;

    let Some(mmr) = api
        .mmr(identity.region, &identity.name, &identity.tag)
        .await?
    else {
        ctx.reply(format!(
            "❌ Rank information for **{identity}** not found."
        ))
        .await?;
        return Ok(());
    };

    let current = &mmr.current_data;
    let current_rank = current
        .currenttierpatched
        .clone()
        .unwrap_or_else(|| "Unranked".to_string());

    // The history endpoint has exact per-match RR swings; summing the last
    // ten gives the recent trend. Best effort only.
    let rr_last_ten: Option<i64> = match api
        .mmr_history(identity.region, &identity.name, &identity.tag)
        .await
    {
        Ok(Some(history)) if !history.is_empty() => Some(
            history
                .iter()
                .take(10)
                .map(|entry| entry.mmr_change_to_last_game)
                .sum(),
        ),
        Ok(_) => None,
        Err(e) => {
            debug!("Ignoring MMR history failure for {identity}: {e}");
            None
        }
    };

    let mut current_embed = CreateEmbed::new()
        .title(format!("{identity} - Rank"))
        .color(rank_color(current.currenttier))
        .field("🏅 Current Rank", format!("**{current_rank}**"), true)
        .field("⭐ RR", format!("**{}** RR", current.ranking_in_tier), true)
        .field("\u{200b}", "\u{200b}", true)
        .field(
            "📊 RR Change (1 Match)",
            format!("**{:+}**", current.mmr_change_to_last_game),
            true,
        )
        .field(
            "📈 RR Change (10 Matches)",
            match rr_last_ten {
                Some(total) => format!("**{total:+}**"),
                None => "**N/A**".to_string(),
            },
            true,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Region: {}",
            identity.region.as_str().to_uppercase()
        )))
        .timestamp(Timestamp::now());
    if let Some(url) = current.images.as_ref().and_then(|images| images.large.clone()) {
        current_embed = current_embed.thumbnail(url);
    }

    let mut reply = CreateReply::default().embed(current_embed);
    if let Some(peak) = peak_embed(&identity, &mmr) {
        reply = reply.embed(peak);
    }
    ctx.send(reply).await?;
    Ok(())
}

/// Highest-ranked season on record, if the player ever finished one.
fn peak_embed(identity: &PlayerIdentity, mmr: &MmrData) -> Option<CreateEmbed> {
    let (season, season_mmr) = mmr
        .by_season
        .iter()
        .filter(|(_, season)| season.final_rank > 0)
        .max_by_key(|(_, season)| season.final_rank)?;

    let season_label = display_season(season);
    let peak_rank = season_mmr
        .final_rank_patched
        .clone()
        .unwrap_or_else(|| "Unknown".to_string());
    let winrate = season_mmr.wins as f64 / season_mmr.number_of_games.max(1) as f64 * 100.0;

    Some(
        CreateEmbed::new()
            .title(format!("{identity} - Peak Rank"))
            .color(rank_color(season_mmr.final_rank))
            .thumbnail(format!(
                "{TIER_ICON_BASE}/{}/largeicon.png",
                season_mmr.final_rank
            ))
            .field("🏆 Peak Rank", format!("**{peak_rank}**"), true)
            .field("📅 Season", format!("**{season_label}**"), true)
            .field("\u{200b}", "\u{200b}", true)
            .field("🎮 Matches", format!("**{}**", season_mmr.number_of_games), true)
            .field("🏆 Winrate", format!("**{winrate:.1}%**"), true)
            .field("\u{200b}", "\u{200b}", true)
            .field("✅ Wins", format!("**{}**", season_mmr.wins), true)
            .field(
                "❌ Losses",
                format!("**{}**", season_mmr.number_of_games - season_mmr.wins),
                true,
            )
            .field("\u{200b}", "\u{200b}", true)
            .footer(CreateEmbedFooter::new(format!(
                "Highest rank achieved in {season_label}"
            )))
            .timestamp(Timestamp::now()),
    )
}
