use crate::command::{fetch_act_matches, resolve_identity, CommandError, Data, LOSS_RED, WIN_GREEN};
use clutch_api::model::{MatchMetadata, TeamSide};
use clutch_stats::{find_player, headshot_pct, lobby_placement};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter};
use poise::CreateReply;
use std::collections::HashMap;
use tracing::debug;

// Discord caps a single message at ten embeds.
const MAX_MATCH_EMBEDS: usize = 10;

const MAP_SPLASHES: &[(&str, &str)] = &[
    ("Abyss", "https://media.valorant-api.com/maps/224b0a95-48b9-f703-1bd8-67aca101a61f/splash.png"),
    ("Ascent", "https://media.valorant-api.com/maps/7eaecc1b-4337-bbf6-6ab9-04b8f06b3319/splash.png"),
    ("Bind", "https://media.valorant-api.com/maps/2c9d57ec-4431-9c5e-2939-8f9ef6dd5cba/splash.png"),
    ("Breeze", "https://media.valorant-api.com/maps/2fb9a4fd-47b8-4e7d-a969-74b4046ebd53/splash.png"),
    ("Fracture", "https://media.valorant-api.com/maps/b529448b-4d60-346e-e89e-00a4c527a405/splash.png"),
    ("Haven", "https://media.valorant-api.com/maps/2bee0dc9-4ffe-519b-1cbd-7fbe763a6047/splash.png"),
    ("Icebox", "https://media.valorant-api.com/maps/e2ad5c54-4114-a870-9641-8ea21279579a/splash.png"),
    ("Lotus", "https://media.valorant-api.com/maps/2fe4ed3a-450a-948b-6d6b-e89a78e680a9/splash.png"),
    ("Pearl", "https://media.valorant-api.com/maps/fd267378-4d1d-484f-ff52-77821ed10dc2/splash.png"),
    ("Split", "https://media.valorant-api.com/maps/d960549e-485c-e861-8d71-aa9d1aed12a2/splash.png"),
    ("Sunset", "https://media.valorant-api.com/maps/92584fbe-486a-b1b2-9faa-39b0f486b498/splash.png"),
    ("Corrode", "https://media.valorant-api.com/maps/1c18ab1f-420d-0d8b-71d0-77ad3c439115/splash.png"),
];

fn map_splash(map: &str) -> Option<&'static str> {
    MAP_SPLASHES
        .iter()
        .find(|(name, _)| *name == map)
        .map(|(_, url)| *url)
}

fn start_label(metadata: &MatchMetadata) -> String {
    metadata
        .game_start
        .and_then(|secs| chrono::DateTime::from_timestamp(secs, 0))
        .map(|ts| ts.format("%A, %B %-d, %Y %H:%M").to_string())
        .or_else(|| metadata.game_start_patched.clone())
        .unwrap_or_else(|| "Unknown date".to_string())
}

/// Shows the last 10 ranked matches with detailed stats
#[poise::command(slash_command)]
pub async fn matches(
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

    let Some(matches) = fetch_act_matches(api, &identity).await? else {
        ctx.reply(format!("❌ No matches found for **{identity}**."))
            .await?;
        return Ok(());
    };
    if matches.is_empty() {
        ctx.reply(format!(
            "❌ No matches found in current act for **{identity}**."
        ))
        .await?;
        return Ok(());
    }

    // RR changes come from a separate endpoint; best effort only.
    let rr_changes: HashMap<String, i64> = match api
        .mmr_history(identity.region, &identity.name, &identity.tag)
        .await
    {
        Ok(Some(history)) => history
            .into_iter()
            .filter_map(|entry| Some((entry.match_id?, entry.mmr_change_to_last_game)))
            .collect(),
        Ok(None) => HashMap::new(),
        Err(e) => {
            debug!("Ignoring MMR history failure for {identity}: {e}");
            HashMap::new()
        }
    };

    let mut reply = CreateReply::default();
    let mut shown = 0;
    for record in matches.iter().take(MAX_MATCH_EMBEDS) {
        let Some(player) = find_player(record, &identity) else {
            continue;
        };

        let (won, score) = match player.team {
            Some(TeamSide::Red) => (
                record.teams.red.has_won,
                format!(
                    "{}-{}",
                    record.teams.red.rounds_won, record.teams.blue.rounds_won
                ),
            ),
            _ => (
                record.teams.blue.has_won,
                format!(
                    "{}-{}",
                    record.teams.blue.rounds_won, record.teams.red.rounds_won
                ),
            ),
        };
        let result = if won {
            format!("Win {score}")
        } else {
            format!("Loss {score}")
        };

        let mut embed = CreateEmbed::new()
            .title(format!("🎮 {result}"))
            .color(if won { WIN_GREEN } else { LOSS_RED });

        if let Some(url) = player.assets.as_ref().and_then(|a| a.agent.small.clone()) {
            embed = embed.thumbnail(url);
        }
        if let Some(url) = record.metadata.map.as_deref().and_then(map_splash) {
            embed = embed.image(url);
        }

        let placement = lobby_placement(record, &identity).unwrap_or(1);
        embed = embed
            .field(
                "📊 K/D/A",
                format!(
                    "**{}/{}/{}**",
                    player.stats.kills, player.stats.deaths, player.stats.assists
                ),
                true,
            )
            .field(
                "🎯 Headshot %",
                format!("**{:.1}%**", headshot_pct(&player.stats)),
                true,
            )
            .field("\u{200b}", "\u{200b}", true)
            .field(
                "🏅 Placement",
                format!(
                    "**#{placement}**/{}",
                    record.players.all_players.len()
                ),
                true,
            );

        if let Some(rr) = record
            .metadata
            .match_id
            .as_ref()
            .and_then(|id| rr_changes.get(id))
        {
            let light = if *rr >= 0 { "🟢" } else { "🔴" };
            embed = embed.field("📈 RR Change", format!("**{light} {rr:+}**"), true);
        }

        embed = embed
            .field("\u{200b}", "\u{200b}", true)
            .footer(CreateEmbedFooter::new(start_label(&record.metadata)));

        reply = reply.embed(embed);
        shown += 1;
    }

    if shown == 0 {
        ctx.reply(format!("❌ No match data found for **{identity}**."))
            .await?;
        return Ok(());
    }
    ctx.send(reply).await?;
    Ok(())
}
