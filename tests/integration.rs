// SPDX-License-Identifier: MPL-2.0
use colega::config::{self, Config};
use colega::i18n::fluent::I18n;
use colega::ui::onboarding::{
    Effect, Message, PanelAnimation, State, ViewState, COLLAPSED_HEIGHT, SLIDE_DURATION,
};
use std::time::Instant;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: es
    let initial_config = Config {
        language: Some("es".to_string()),
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_es = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_es.current_locale().to_string(), "es");
    assert_eq!(
        i18n_es.tr("error-auth-invalid-credentials"),
        "Credenciales incorrectas. Inténtalo de nuevo."
    );

    // 2. Change config to en-US
    let english_config = Config {
        language: Some("en-US".to_string()),
    };
    config::save_to_path(&english_config, &temp_config_file_path)
        .expect("Failed to write english config file");

    let loaded_english_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load english config from path");
    let i18n_en = I18n::new(None, &loaded_english_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_lang_overrides_config() {
    let config = Config {
        language: Some("en-US".to_string()),
    };
    let i18n = I18n::new(Some("es".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "es");
}

#[test]
fn test_onboarding_flow_over_the_public_api() {
    let now = Instant::now();
    let mut state = State::new();

    // Initial choice → login form.
    assert_eq!(state.view_state(), ViewState::Initial);
    state.handle_message(Message::SignInPressed, now);
    assert_eq!(state.view_state(), ViewState::Login);
    assert!(state.is_animating());

    // Submit the entered pair; the screen requests an authenticate effect.
    state.handle_message(Message::LoginEmailChanged("test".into()), now);
    state.handle_message(Message::LoginPasswordChanged("wrong".into()), now);
    let effect = state.handle_message(Message::LoginSubmitted, now);
    assert_eq!(
        effect,
        Effect::Authenticate {
            username: "test".into(),
            password: "wrong".into(),
        }
    );

    // A rejection surfaces the blocking dialog and nothing else.
    let effect = state.handle_message(
        Message::LoginCompleted(Err(colega::auth::AuthError::InvalidCredentials)),
        now,
    );
    assert_eq!(effect, Effect::None);
    assert!(state.error_dialog_key().is_some());

    state.handle_message(Message::ErrorDismissed, now);
    assert!(state.error_dialog_key().is_none());

    // Back to the initial choice, then over to the register form.
    state.handle_message(Message::BackPressed, now);
    assert_eq!(state.view_state(), ViewState::Initial);
    state.handle_message(Message::CreateAccountPressed, now);
    assert_eq!(state.view_state(), ViewState::Register);

    // Register submit is an acknowledged no-op.
    let effect = state.handle_message(Message::RegisterSubmitted, now);
    assert_eq!(effect, Effect::None);
    assert_eq!(state.view_state(), ViewState::Register);
}

#[test]
fn test_panel_contract_end_to_end() {
    let t0 = Instant::now();
    let mut panel = PanelAnimation::new();

    panel.retarget(true, t0);
    let settled = t0 + SLIDE_DURATION;
    assert_eq!(panel.expansion_at(settled), 1.0);
    assert_eq!(panel.fade_at(settled), 0.0);
    assert_eq!(panel.panel_height(760.0, settled), 660.0);

    panel.retarget(false, settled);
    let collapsed = settled + SLIDE_DURATION;
    assert_eq!(panel.expansion_at(collapsed), 0.0);
    assert_eq!(panel.panel_height(760.0, collapsed), COLLAPSED_HEIGHT);
}
