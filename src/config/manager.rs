//! 設定ファイルの読み込みと保持

use std::io::ErrorKind;
use std::path::{
    Path,
    PathBuf,
};

use super::{
    ConfigError,
    MergeSettings,
};

/// 設定ファイル名
pub const CONFIG_FILE_NAME: &str = ".locale-merge.json";

/// 作業ディレクトリと、そこで有効な検証済みの設定
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// 検証済みの設定
    settings: MergeSettings,

    /// 作業ディレクトリ（相対パスの基準）
    workspace_root: PathBuf,
}

impl ConfigManager {
    /// 作業ディレクトリの `.locale-merge.json` を読み込む
    ///
    /// ファイルがなければデフォルト設定を使う。
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load(workspace_root: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let workspace_root = workspace_root.into();
        let settings = read_config_file(&workspace_root)?.unwrap_or_default();
        Self::with_settings(workspace_root, settings)
    }

    /// 設定を検証して作業ディレクトリと組み合わせる
    ///
    /// # Errors
    /// - バリデーションエラー
    pub fn with_settings(
        workspace_root: impl Into<PathBuf>,
        settings: MergeSettings,
    ) -> Result<Self, ConfigError> {
        settings.validate().map_err(ConfigError::ValidationErrors)?;
        tracing::debug!("Settings validated: {:?}", settings);

        Ok(Self { settings, workspace_root: workspace_root.into() })
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn settings(&self) -> &MergeSettings {
        &self.settings
    }

    /// 作業ディレクトリのルートを取得
    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// `localesDir` を作業ディレクトリ基準で解決したパス
    #[must_use]
    pub fn locales_dir(&self) -> PathBuf {
        self.workspace_root.join(&self.settings.locales_dir)
    }
}

/// 設定ファイルを読み込む。存在しなければ `None`
fn read_config_file(workspace_root: &Path) -> Result<Option<MergeSettings>, ConfigError> {
    let path = workspace_root.join(CONFIG_FILE_NAME);

    let content = match std::fs::read_to_string(&path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!("Configuration file not found: {}", path.display());
            return Ok(None);
        }
        Err(source) => return Err(ConfigError::Io { path, source }),
    };

    tracing::info!("Using configuration from {}", path.display());
    serde_json::from_str(&content).map(Some).map_err(|source| ConfigError::Parse { path, source })
}
