use crate::command::{CommandError, Data, BLURPLE};
use indoc::indoc;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;

/// Shows all available commands with descriptions
#[poise::command(slash_command)]
pub async fn help(ctx: poise::Context<'_, Data, CommandError>) -> Result<(), CommandError> {
    let embed = CreateEmbed::new()
        .title("📖 Valorant Stats Bot - Commands")
        .description("All available commands and their descriptions")
        .color(BLURPLE)
        .field(
            "🔗 Account Management",
            indoc! {"
                **`/linkacc`** - Link your Valorant account
                └ Use commands without entering name/tag every time

                **`/unlinkacc`** - Unlink your Valorant account
                └ Remove the linked account from your profile
            "},
            false,
        )
        .field(
            "📊 Player Statistics",
            indoc! {"
                **`/stats`** - Player performance overview
                └ K/D, ADR, DDΔ, HS%, Winrate from last 10 matches

                **`/matches`** - Match history (last 10 games)
                └ Detailed stats, agent icons, map images, RR changes

                **`/rank`** - Current rank & peak rank
                └ Shows rank, RR, MMR changes, and peak season
            "},
            false,
        )
        .field(
            "🏆 Server Features",
            indoc! {"
                **`/leaderboard`** - Server ranked leaderboard
                └ Top 15 players sorted by rank and RR

                **`/help`** - Shows this help message
                └ Overview of all commands
            "},
            false,
        )
        .field(
            "💡 Quick Tips",
            indoc! {"
                • Link your account with `/linkacc` to use all commands without parameters
                • All commands support EU, NA, AP, KR regions
                • Use `/leaderboard` to compete with friends on your server
            "},
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Requested by {} | Powered by Henrik Dev API",
            ctx.author().name
        )))
        .timestamp(Timestamp::now());

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}
