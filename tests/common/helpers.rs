use fake::{
    faker::{internet::en::SafeEmail, name::en::Name},
    Fake,
};
use secrecy::SecretString;
use sportbuddy::{
    app::{api::ProfileApi, profile::ProfilePage},
    telemetry::{build_telemetry, register_telemetry},
};
use std::sync::LazyLock;
use uuid::Uuid;
use wiremock::MockServer;

static TELEMETRY: LazyLock<()> = LazyLock::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    if std::env::var("TEST_LOG").is_ok() {
        let telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::stdout);
        register_telemetry(telemetry);
    } else {
        let null_telemetry = build_telemetry(subscriber_name, default_filter_level, std::io::sink);
        register_telemetry(null_telemetry);
    };
});

pub struct TestPage {
    pub backend: MockServer,
    pub api: ProfileApi,
    pub page: ProfilePage,
    pub token: SecretString,
    pub test_user: TestUser,
}

pub struct TestUser {
    pub user_name: String,
    pub email: String,
}

impl TestUser {
    pub fn generate() -> Self {
        TestUser {
            user_name: Name().fake(),
            email: SafeEmail().fake(),
        }
    }

    /// The wire shape of this user, with an optional stored avatar URL.
    pub fn as_record(&self, avatar: Option<&str>) -> serde_json::Value {
        serde_json::json!({
            "user_name": self.user_name,
            "email": self.email,
            "avatar": avatar,
        })
    }
}

pub async fn spawn_page() -> TestPage {
    LazyLock::force(&TELEMETRY);

    let backend = MockServer::start().await;
    let api = ProfileApi::new(&backend.uri());
    let token = SecretString::from(Uuid::new_v4().to_string());

    TestPage {
        backend,
        api,
        page: ProfilePage::new(),
        token,
        test_user: TestUser::generate(),
    }
}
