use crate::command::{fetch_act_matches, resolve_identity, CommandError, Data, BLURPLE};
use clutch_stats::display_season;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;
use tracing::debug;

const DEFAULT_RANK_ICON: &str = "https://i.imgur.com/JkNS0Xu.png";

/// Shows an overview of stats from the last 10 Ranked matches
#[poise::command(slash_command)]
pub async fn stats(
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

    // Account lookup doubles as existence check and playercard source.
    let Some(account) = api.account(&identity.name, &identity.tag).await? else {
        ctx.reply(format!(
            "❌ Account **{identity}** not found.\n*Tip: Pay attention to capitalization and correct spelling.*"
        ))
        .await?;
        return Ok(());
    };

    // Rank icon is cosmetic, so a failed MMR lookup never blocks the stats.
    let mmr = match api.mmr(identity.region, &identity.name, &identity.tag).await {
        Ok(mmr) => mmr,
        Err(e) => {
            debug!("Ignoring MMR lookup failure for {identity}: {e}");
            None
        }
    };

    let Some(matches) = fetch_act_matches(api, &identity).await? else {
        ctx.reply(format!(
            "❌ Player **{identity}** not found or no data available."
        ))
        .await?;
        return Ok(());
    };
    if matches.is_empty() {
        ctx.reply(format!(
            "❌ No matches in current act found for **{identity}**."
        ))
        .await?;
        return Ok(());
    }

    let Some(totals) = clutch_stats::aggregate(&matches, &identity) else {
        ctx.reply(format!("❌ No statistics found for **{identity}**."))
            .await?;
        return Ok(());
    };

    let act = matches
        .first()
        .map(|m| display_season(&m.metadata.season.short))
        .unwrap_or_else(|| "Unknown Act".to_string());

    let mut embed = CreateEmbed::new()
        .title(format!("**{identity}** • **{act}**"))
        .description("📊 Stats overview of the last 10 ranked matches")
        .color(BLURPLE)
        .field("💀 Kills", format!("```{}```", totals.kills), true)
        .field(
            "📊 K/D Ratio",
            format!(
                "```{:.2}```",
                totals.kills as f64 / totals.deaths.max(1) as f64
            ),
            true,
        )
        .field("\u{200b}", "\u{200b}", true)
        .field(
            "🎯 Headshot %",
            format!("```{:.1}%```", totals.headshot_pct()),
            true,
        )
        .field(
            "🏆 Winrate",
            format!("```{:.1}%```", totals.winrate_pct()),
            true,
        )
        .field("\u{200b}", "\u{200b}", true)
        .field("💥 ADR/Round", format!("```{:.1}```", totals.adr()), true)
        .field(
            "Δ DDΔ/Round",
            format!("```{:+.1}```", totals.damage_delta()),
            true,
        )
        .field("\u{200b}", "\u{200b}", true);

    let rank_icon = mmr
        .as_ref()
        .and_then(|m| m.current_data.images.as_ref())
        .and_then(|images| images.small.clone())
        .unwrap_or_else(|| DEFAULT_RANK_ICON.to_string());
    embed = embed.thumbnail(rank_icon);

    if let Some(card) = account.card {
        if let Some(url) = card.wide.or(card.large) {
            embed = embed.image(url);
        }
    }

    embed = embed
        .footer(CreateEmbedFooter::new(format!(
            "Stats from the last {} matches in {act}",
            totals.matches
        )))
        .timestamp(Timestamp::now());

    ctx.send(CreateReply::default().embed(embed)).await?;
    Ok(())
}
