use crate::app::api::ProfileApi;

#[derive(clap::Parser)]
pub struct AppConfig {
    #[clap(long, env)]
    pub stage: Stage,

    // App configs
    #[clap(long, env)]
    pub app_api_base_url: String,
}

#[derive(clap::ValueEnum, Debug, Clone)]
#[clap(rename_all = "kebab_case")]
pub enum Stage {
    Dev,
    Prod,
}

impl AppConfig {
    /// Parse from flags and environment, loading `.env` first.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        <Self as clap::Parser>::parse()
    }

    pub fn profile_api(&self) -> ProfileApi {
        ProfileApi::new(&self.app_api_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn parses_from_flags() {
        let config = AppConfig::try_parse_from([
            "sportbuddy",
            "--stage",
            "dev",
            "--app-api-base-url",
            "http://localhost:3001/api",
        ])
        .unwrap();

        assert_eq!(config.app_api_base_url, "http://localhost:3001/api");
        assert!(matches!(config.stage, Stage::Dev));

        let _api = config.profile_api();
    }
}
