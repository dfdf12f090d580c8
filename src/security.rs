//! Security Module
//!
//! セキュリティ対策を実装するモジュール。
//! 巨大な入力ファイルの拒否と、出力名によるパストラバーサル攻撃への対策を提供します。

/// セキュリティ設定
///
/// ファイル処理時のセキュリティ制限を定義します。
#[derive(Debug, Clone)]
pub(crate) struct SecurityConfig {
    /// 入力ファイルの最大サイズ（バイト）
    /// デフォルト: 2GB (2_147_483_648 bytes)
    pub max_input_file_size: u64,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            max_input_file_size: 2_147_483_648, // 2GB
        }
    }
}

impl SecurityConfig {
    /// 入力サイズを検証
    ///
    /// # 戻り値
    ///
    /// * `Ok(())` - 上限以下の場合
    /// * `Err(String)` - 上限を超える場合
    pub fn check_input_size(&self, size: u64) -> Result<(), String> {
        if size > self.max_input_file_size {
            return Err(format!(
                "Input file size exceeds maximum: {} bytes (max: {} bytes)",
                size, self.max_input_file_size
            ));
        }
        Ok(())
    }
}

/// 出力名の検証
///
/// 出力名はセルのテキストから決まるため、書き込み前に検証します。
/// 出力名は出力ディレクトリ直下のファイル名としてのみ使用できます。
///
/// # 引数
///
/// * `name` - 検証する出力名（拡張子なし）
///
/// # 戻り値
///
/// * `Ok(())` - 名前が安全な場合
/// * `Err(String)` - 名前が危険な場合（空、`.`/`..`、パス区切り文字、NUL文字）
pub(crate) fn validate_output_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("Empty output name is not allowed".to_string());
    }

    if name == "." || name == ".." {
        return Err(format!("Path traversal detected: {}", name));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(format!("Path separator in output name is not allowed: {}", name));
    }

    if name.contains('\0') {
        return Err(format!("NUL character in output name is not allowed: {:?}", name));
    }

    Ok(())
}
