pub const CONFIG_FILE_NAME: &str = "llmcat.toml";
pub const CONFIG_DIR_NAME: &str = ".llmcat";
pub const SYSTEM_CONFIG_PATH: &str = "/etc/llmcat/llmcat.toml";

pub const ENV_CONFIG_PATH: &str = "LLMCAT_CONFIG_PATH";
pub const ENV_WORKSPACE: &str = "LLMCAT_WORKSPACE";
