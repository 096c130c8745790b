use crate::command::{CommandError, Data, LOSS_RED};
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;

/// Unlink your Valorant account
#[poise::command(slash_command)]
pub async fn unlinkacc(ctx: poise::Context<'_, Data, CommandError>) -> Result<(), CommandError> {
    let user_id = ctx.author().id.get();

    let Some(linked) = ctx.data().link_store.get(user_id).await? else {
        ctx.send(
            CreateReply::default()
                .content("❌ No account linked! Use `/linkacc` to link an account first.")
                .ephemeral(true),
        )
        .await?;
        return Ok(());
    };

    ctx.data().link_store.remove(user_id).await?;

    let embed = CreateEmbed::new()
        .title("✅ Account Unlinked Successfully!")
        .description(format!(
            "Your Discord account has been unlinked from **{linked}**"
        ))
        .color(LOSS_RED)
        .field(
            "💡 What's next?",
            "You'll need to provide name and tag when using commands, or link a new account with `/linkacc`.",
            false,
        )
        .footer(CreateEmbedFooter::new(format!(
            "Unlinked by {}",
            ctx.author().name
        )))
        .timestamp(Timestamp::now());

    ctx.send(CreateReply::default().embed(embed).ephemeral(true))
        .await?;
    Ok(())
}
