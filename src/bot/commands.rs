use teloxide::{
    payloads::{DeleteMyCommandsSetters, SetMyCommandsSetters},
    prelude::*,
    types::{BotCommand, BotCommandScope, ChatId, Recipient},
    RequestError,
};

use super::languages::{Languages, DEFAULT_LANGUAGE};

/* Commands registers the bot's command menus with Telegram.
 * Three menus exist per language:
 *   - base commands, shown in every private chat
 *   - group commands, shown in every group chat
 *   - admin commands, the base commands plus admin tools, shown in the admin chat
 * Registration runs scope by scope: admin chat, private chats, group chats.
 * Within a scope the default language goes first, registered without a language code.
 * Calls are sequential and best-effort. A failure stops the run and leaves
 * scopes that were already updated as they are.
 */

#[derive(thiserror::Error, Debug)]
pub enum RegistrarError {
    #[error("Chat with DEV_ID {0} not found.")]
    AdminChatNotFound(i64),
    #[error("Request error: {0}")]
    Request(RequestError),
}

impl From<RequestError> for RegistrarError {
    fn from(request_error: RequestError) -> RegistrarError {
        RegistrarError::Request(request_error)
    }
}

/* The two Bot API verbs the registrar needs.
 * Implemented for teloxide's Bot, and by a recording client in tests.
 */
#[allow(async_fn_in_trait)]
pub trait CommandsClient {
    async fn set_commands(
        &self,
        commands: Vec<BotCommand>,
        scope: BotCommandScope,
        language_code: Option<String>,
    ) -> Result<(), RequestError>;

    async fn delete_commands(
        &self,
        scope: BotCommandScope,
        language_code: Option<String>,
    ) -> Result<(), RequestError>;
}

impl CommandsClient for Bot {
    async fn set_commands(
        &self,
        commands: Vec<BotCommand>,
        scope: BotCommandScope,
        language_code: Option<String>,
    ) -> Result<(), RequestError> {
        let mut request = self.set_my_commands(commands).scope(scope);
        if let Some(code) = language_code {
            request = request.language_code(code);
        }
        request.await?;
        Ok(())
    }

    async fn delete_commands(
        &self,
        scope: BotCommandScope,
        language_code: Option<String>,
    ) -> Result<(), RequestError> {
        let mut request = self.delete_my_commands().scope(scope);
        if let Some(code) = language_code {
            request = request.language_code(code);
        }
        request.await?;
        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CommandLists {
    pub base: Vec<BotCommand>,
    pub group: Vec<BotCommand>,
    pub admin: Vec<BotCommand>,
}

struct Descriptions {
    start: &'static str,
    language: &'static str,
    ban: &'static str,
    silent: &'static str,
    information: &'static str,
    newsletter: &'static str,
}

const EN_DESCRIPTIONS: Descriptions = Descriptions {
    start: "Restart bot",
    language: "Change language",
    ban: "Block/Unblock a user",
    silent: "Activate/Deactivate silent Mode",
    information: "User information",
    newsletter: "Newsletter menu",
};

const ES_DESCRIPTIONS: Descriptions = Descriptions {
    start: "Reiniciar el bot",
    language: "Cambiar idioma",
    ban: "Bloquear/Desbloquear a un usuario",
    silent: "Activar/Desactivar modo silencioso",
    information: "Información del usuario",
    newsletter: "Menú de boletines",
};

const HI_DESCRIPTIONS: Descriptions = Descriptions {
    start: "बॉट पुनः प्रारंभ करें",
    language: "भाषा बदलें",
    ban: "उपयोगकर्ता को ब्लॉक/अनब्लॉक करें",
    silent: "स्थिर मोड सक्रिय/निष्क्रिय करें",
    information: "उपयोगकर्ता जानकारी",
    newsletter: "न्यूज़लेटर मेनू",
};

// Languages without their own descriptions use the English ones.
fn descriptions(language_code: &str) -> &'static Descriptions {
    match language_code {
        "es" => &ES_DESCRIPTIONS,
        "hi" => &HI_DESCRIPTIONS,
        _ => &EN_DESCRIPTIONS,
    }
}

/* Builds the three command menus for one language.
 * The language command is only offered when there is more than one language.
 */
pub fn build_command_lists(language_code: &str, languages: &Languages) -> CommandLists {
    let text = descriptions(language_code);

    let mut base = vec![BotCommand::new("start", text.start)];
    if languages.is_multilingual() {
        base.push(BotCommand::new("language", text.language));
    }

    let group = vec![
        BotCommand::new("ban", text.ban),
        BotCommand::new("silent", text.silent),
        BotCommand::new("information", text.information),
    ];

    let mut admin = base.clone();
    admin.push(BotCommand::new("newsletter", text.newsletter));

    CommandLists { base, group, admin }
}

pub fn admin_scope(admin_chat_id: i64) -> BotCommandScope {
    BotCommandScope::Chat {
        chat_id: Recipient::Id(ChatId(admin_chat_id)),
    }
}

// The default language is registered without a code, so it covers every client language.
fn language_param(language_code: &str, languages: &Languages) -> Option<String> {
    if language_code == languages.default_code() {
        None
    } else {
        Some(language_code.to_string())
    }
}

/* Translates a rejected admin chat call into a configuration error.
 * Any error Telegram answers for the admin scope means DEV_ID is unusable.
 * Network and parsing failures stay request errors.
 */
fn admin_chat_error(request_error: RequestError, admin_chat_id: i64) -> RegistrarError {
    match request_error {
        RequestError::Api(api_error) => {
            log::error!("Admin chat {admin_chat_id} rejected: {api_error}");
            RegistrarError::AdminChatNotFound(admin_chat_id)
        }
        other => RegistrarError::Request(other),
    }
}

/* Registers command menus for all scopes and languages.
 * Called once at startup.
 */
pub async fn setup<C: CommandsClient>(
    client: &C,
    admin_chat_id: i64,
    languages: &Languages,
) -> Result<(), RegistrarError> {
    let ordered = languages.ordered();

    for code in &ordered {
        let lists = build_command_lists(code, languages);
        client
            .set_commands(
                lists.admin,
                admin_scope(admin_chat_id),
                language_param(code, languages),
            )
            .await
            .map_err(|err| admin_chat_error(err, admin_chat_id))?;
    }
    log::info!("Admin commands set for chat {admin_chat_id}");

    for code in &ordered {
        let lists = build_command_lists(code, languages);
        client
            .set_commands(
                lists.base,
                BotCommandScope::AllPrivateChats,
                language_param(code, languages),
            )
            .await?;
    }
    log::info!("Private chat commands set");

    for code in &ordered {
        let lists = build_command_lists(code, languages);
        client
            .set_commands(
                lists.group,
                BotCommandScope::AllGroupChats,
                language_param(code, languages),
            )
            .await?;
    }
    log::info!(
        "Group chat commands set for {} language(s), default {}",
        ordered.len(),
        ordered.first().copied().unwrap_or(DEFAULT_LANGUAGE)
    );

    Ok(())
}

/* Clears command menus for the same scopes and languages as setup.
 * Called once at shutdown.
 */
pub async fn teardown<C: CommandsClient>(
    client: &C,
    admin_chat_id: i64,
    languages: &Languages,
) -> Result<(), RegistrarError> {
    let ordered = languages.ordered();

    for code in &ordered {
        client
            .delete_commands(admin_scope(admin_chat_id), language_param(code, languages))
            .await
            .map_err(|err| admin_chat_error(err, admin_chat_id))?;
    }

    for scope in [BotCommandScope::AllPrivateChats, BotCommandScope::AllGroupChats] {
        for code in &ordered {
            client
                .delete_commands(scope.clone(), language_param(code, languages))
                .await?;
        }
    }
    log::info!("Commands deleted for all scopes");

    Ok(())
}
