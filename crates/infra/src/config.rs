use medtrack_utils::create_random_secret;
use tracing::{info, warn};

const MINUTE_MILLIS: i64 = 1000 * 60;

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    pub jwt: JwtConfig,
    /// Credentials for sending text messages, `None` means messages are
    /// only kept in memory
    pub twilio: Option<TwilioConfig>,
    /// Credentials for sending emails, `None` means emails are only kept in memory
    pub sendgrid: Option<SendgridConfig>,
    pub reminder_dispatch: ReminderDispatchConfig,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    /// Lifetime of access tokens in seconds
    pub access_expires_in: i64,
    /// Lifetime of refresh tokens in seconds
    pub refresh_expires_in: i64,
}

#[derive(Debug, Clone)]
pub struct TwilioConfig {
    pub account_sid: String,
    pub auth_token: String,
    /// Number the text messages are sent from
    pub from_number: String,
}

#[derive(Debug, Clone)]
pub struct SendgridConfig {
    pub api_key: String,
    /// Address the emails are sent from
    pub from_email: String,
}

#[derive(Debug, Clone)]
pub struct ReminderDispatchConfig {
    /// Millis between two runs of the reminder dispatch job
    pub interval_millis: i64,
    /// How far ahead of now a run looks for due `Reminder`s
    pub window_millis: i64,
    /// Leave out `Reminder`s that are already taken. Off by default, taken
    /// `Reminder`s inside the window are notified again.
    pub skip_taken: bool,
}

impl Default for ReminderDispatchConfig {
    fn default() -> Self {
        Self {
            interval_millis: 30 * MINUTE_MILLIS,
            window_millis: 30 * MINUTE_MILLIS,
            skip_taken: false,
        }
    }
}

fn get_jwt_secret(env_var: &str) -> String {
    match std::env::var(env_var) {
        Ok(secret) if !secret.is_empty() => secret,
        _ => {
            warn!(
                "Did not find {} environment variable. Going to create one, tokens will not survive a restart.",
                env_var
            );
            create_random_secret(32)
        }
    }
}

fn get_seconds(env_var: &str, default: i64) -> i64 {
    match std::env::var(env_var) {
        Ok(value) => match value.parse::<i64>() {
            Ok(secs) if secs > 0 => secs,
            _ => {
                warn!(
                    "The given {}: {} is not a valid amount of seconds, falling back to the default: {}.",
                    env_var, value, default
                );
                default
            }
        },
        Err(_) => default,
    }
}

fn get_present(env_var: &str) -> Option<String> {
    std::env::var(env_var).ok().filter(|v| !v.is_empty())
}

impl Config {
    pub fn new() -> Self {
        let default_port = 5000;
        let port = match std::env::var("PORT") {
            Ok(port) => match port.parse::<usize>() {
                Ok(port) => port,
                Err(_) => {
                    warn!(
                        "The given PORT: {} is not valid, falling back to the default port: {}.",
                        port, default_port
                    );
                    default_port
                }
            },
            Err(_) => default_port,
        };

        let jwt = JwtConfig {
            access_secret: get_jwt_secret("JWT_ACCESS_SECRET"),
            refresh_secret: get_jwt_secret("JWT_REFRESH_SECRET"),
            access_expires_in: get_seconds("JWT_ACCESS_EXPIRES_IN", 60 * 60),
            refresh_expires_in: get_seconds("JWT_REFRESH_EXPIRES_IN", 60 * 60 * 24 * 7),
        };

        let twilio = match (
            get_present("TWILIO_ACCOUNT_SID"),
            get_present("TWILIO_AUTH_TOKEN"),
            get_present("TWILIO_NUMBER"),
        ) {
            (Some(account_sid), Some(auth_token), Some(from_number)) => Some(TwilioConfig {
                account_sid,
                auth_token,
                from_number,
            }),
            _ => {
                info!("Twilio is not configured. Text messages will not leave this process.");
                None
            }
        };

        let sendgrid = match (get_present("SENDGRID_API_KEY"), get_present("USER_EMAIL")) {
            (Some(api_key), Some(from_email)) => Some(SendgridConfig {
                api_key,
                from_email,
            }),
            _ => {
                info!("Sendgrid is not configured. Emails will not leave this process.");
                None
            }
        };

        let skip_taken = match get_present("REMINDER_DISPATCH_SKIP_TAKEN") {
            Some(value) => match value.parse::<bool>() {
                Ok(skip) => skip,
                Err(_) => {
                    warn!(
                        "The given REMINDER_DISPATCH_SKIP_TAKEN: {} is not a boolean, taken reminders will be notified.",
                        value
                    );
                    false
                }
            },
            None => false,
        };

        Self {
            port,
            jwt,
            twilio,
            sendgrid,
            reminder_dispatch: ReminderDispatchConfig {
                skip_taken,
                ..Default::default()
            },
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
