use serde::{Deserialize, Serialize};

/// Optimizer runs setting shared by every shipped compiler.
pub const OPTIMIZER_RUNS: u32 = 200;

/// Optimizer settings for one compiler release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
    /// Whether the Yul intermediate pipeline is enabled.
    pub yul: bool,
}

/// One Solidity compiler release the pipeline compiles with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolcCompiler {
    pub version: String,
    pub optimizer: OptimizerSettings,
}

impl SolcCompiler {
    fn new(version: &str, yul: bool) -> Self {
        Self {
            version: version.to_string(),
            optimizer: OptimizerSettings {
                enabled: true,
                runs: OPTIMIZER_RUNS,
                yul,
            },
        }
    }
}

/// The compiler matrix, newest release first. Contracts pick the first entry
/// whose version satisfies their pragma.
pub fn default_compilers() -> Vec<SolcCompiler> {
    vec![
        SolcCompiler::new("0.8.10", false),
        SolcCompiler::new("0.7.5", true),
        SolcCompiler::new("0.7.3", false),
        SolcCompiler::new("0.5.2", false),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiler_matrix_order() {
        let compilers = default_compilers();
        let versions: Vec<&str> = compilers.iter().map(|c| c.version.as_str()).collect();
        assert_eq!(versions, ["0.8.10", "0.7.5", "0.7.3", "0.5.2"]);
    }

    #[test]
    fn test_optimizer_enabled_everywhere() {
        for compiler in default_compilers() {
            assert!(compiler.optimizer.enabled, "{}", compiler.version);
            assert_eq!(compiler.optimizer.runs, OPTIMIZER_RUNS);
        }
    }

    #[test]
    fn test_yul_only_for_0_7_5() {
        for compiler in default_compilers() {
            assert_eq!(compiler.optimizer.yul, compiler.version == "0.7.5");
        }
    }
}
