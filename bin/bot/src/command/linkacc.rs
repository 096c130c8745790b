use crate::command::{CommandError, Data, WIN_GREEN};
use clutch_api::model::PlayerIdentity;
use indoc::indoc;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;

/// Link your Valorant account to use commands without entering name/tag
#[poise::command(slash_command)]
pub async fn linkacc(
    ctx: poise::Context<'_, Data, CommandError>,
    #[description = "Riot ID Name (e.g., Player)"] name: String,
    #[description = "Riot ID Tag (e.g., EUW)"] tag: String,
    #[description = "Region (eu, na, ap, kr) - optional, defaults to EU"] region: Option<String>,
) -> Result<(), CommandError> {
    let region = match region.as_deref().map(str::parse).transpose() {
        Ok(region) => region.unwrap_or(ctx.data().default_region),
        Err(e) => {
            ctx.send(CreateReply::default().content(format!("❌ {e}")).ephemeral(true))
                .await?;
            return Ok(());
        }
    };

    // Always verify against the API so only real accounts get linked.
    let Some(account) = ctx.data().api.account(&name, &tag).await? else {
        let message =
            format!("❌ Account **{name}#{tag}** not found. Please check the name and tag.");
        ctx.send(CreateReply::default().content(message).ephemeral(true))
            .await?;
        return Ok(());
    };

    // Prefer the upstream casing of name and tag.
    let name = account.name.unwrap_or(name);
    let tag = account.tag.unwrap_or(tag);
    let identity = PlayerIdentity {
        name: name.clone(),
        tag: tag.clone(),
        region,
    };
    ctx.data()
        .link_store
        .upsert(ctx.author().id.get(), identity)
        .await?;

    let embed = CreateEmbed::new()
        .title("✅ Account Linked Successfully!")
        .description(format!(
            "Your Discord account has been linked to **{name}#{tag}**"
        ))
        .color(WIN_GREEN)
        .field(
            "📝 Linked Account",
            format!(
                "**Name:** {name}\n**Tag:** #{tag}\n**Region:** {}",
                region.as_str().to_uppercase()
            ),
            false,
        )
        .field(
            "💡 How to use",
            indoc! {"
                You can now use `/stats`, `/matches`, and `/rank` without entering your name and tag!
            "},
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Linked by {}",
            ctx.author().name
        )))
        .timestamp(Timestamp::now());

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}
