use app_contract::AppModule;

use crate::model::AppId;

mod placeholders;

#[derive(Debug, Clone, Copy)]
pub struct AppDescriptor {
    pub app_id: AppId,
    pub show_on_desktop: bool,
    pub module: AppModule,
}

const APP_CATALOG: [AppDescriptor; 5] = [
    AppDescriptor {
        app_id: AppId::Calculator,
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_calculator),
    },
    AppDescriptor {
        app_id: AppId::Mail,
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_mail),
    },
    AppDescriptor {
        app_id: AppId::Notes,
        show_on_desktop: true,
        module: AppModule::new(placeholders::mount_notes),
    },
    AppDescriptor {
        app_id: AppId::Music,
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_music),
    },
    AppDescriptor {
        app_id: AppId::Resume,
        show_on_desktop: false,
        module: AppModule::new(placeholders::mount_resume),
    },
];

pub fn app_catalog() -> &'static [AppDescriptor] {
    &APP_CATALOG
}

pub fn desktop_icon_apps() -> Vec<AppDescriptor> {
    app_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.show_on_desktop)
        .collect()
}

pub fn app_descriptor(app_id: AppId) -> &'static AppDescriptor {
    app_catalog()
        .iter()
        .find(|entry| entry.app_id == app_id)
        .expect("app descriptor exists")
}

#[cfg(test)]
mod tests {
    use super::*;
    use app_contract::ApplicationId;
    use pretty_assertions::assert_eq;

    #[test]
    fn catalog_covers_every_app() {
        let ids: Vec<AppId> = app_catalog().iter().map(|entry| entry.app_id).collect();
        assert_eq!(
            ids,
            vec![
                AppId::Calculator,
                AppId::Mail,
                AppId::Notes,
                AppId::Music,
                AppId::Resume,
            ]
        );
    }

    #[test]
    fn catalog_ids_pass_contract_validation() {
        // `AppId::application_id` builds ids through the trusted constructor,
        // so the dotted-segment policy is only enforced here.
        for entry in app_catalog() {
            let raw = entry.app_id.application_id();
            assert!(ApplicationId::new(raw.as_str()).is_ok(), "{raw}");
        }
    }

    #[test]
    fn desktop_icons_are_a_catalog_subset() {
        let icons = desktop_icon_apps();
        assert!(!icons.is_empty());
        for entry in icons {
            assert!(entry.show_on_desktop);
            assert_eq!(app_descriptor(entry.app_id).app_id, entry.app_id);
        }
    }
}
