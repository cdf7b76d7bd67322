//! Content provider dispatch for each registered window.

use desktop_app_contract::AppModule;

use crate::model::AppId;

const README: AppModule = AppModule::new(desktop_app_readme::mount_readme);
const ABOUT: AppModule = AppModule::new(desktop_app_readme::mount_about);
const TERMINAL: AppModule = AppModule::new(desktop_app_terminal::mount);
const MUSIC_PLAYER: AppModule = AppModule::new(desktop_app_music_player::mount);
const CALCULATOR: AppModule = AppModule::new(desktop_app_calculator::mount);
const TRASH: AppModule = AppModule::new(desktop_app_trash::mount);
const PONG: AppModule = AppModule::new(desktop_app_pong::mount);

/// Returns the content provider that renders `app_id`'s window body.
pub fn app_module(app_id: AppId) -> AppModule {
    match app_id {
        AppId::ReadMe => README,
        AppId::About => ABOUT,
        AppId::Terminal => TERMINAL,
        AppId::MusicPlayer => MUSIC_PLAYER,
        AppId::Calculator => CALCULATOR,
        AppId::Trash => TRASH,
        AppId::Pong => PONG,
    }
}

/// Apps listed on the desktop surface, in registry order.
pub fn desktop_icon_apps() -> impl Iterator<Item = AppId> {
    AppId::ALL.into_iter().filter(|app| app.has_desktop_icon())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn about_is_only_reachable_from_the_menu() {
        let icons: Vec<AppId> = desktop_icon_apps().collect();
        assert_eq!(
            icons,
            vec![
                AppId::ReadMe,
                AppId::Terminal,
                AppId::MusicPlayer,
                AppId::Calculator,
                AppId::Trash,
                AppId::Pong,
            ]
        );
    }

    #[test]
    fn every_key_round_trips_through_the_registry() {
        for app in AppId::ALL {
            assert_eq!(AppId::from_key(app.key()), Some(app));
        }
        assert_eq!(AppId::from_key(" Music-Player "), Some(AppId::MusicPlayer));
        assert_eq!(AppId::from_key("paint"), None);
    }
}
