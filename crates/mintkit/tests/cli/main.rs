//! Contains various tests for checking mintkit commands

use similar_asserts::assert_eq;
use snapbox::cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RPC_URL: &str = "https://eth-sepolia.g.alchemy.com/v2/test-key";

const MY_NFT_ABI: &str = r#"[{"inputs":[],"stateMutability":"nonpayable","type":"constructor"},{"anonymous":false,"inputs":[{"indexed":true,"internalType":"address","name":"from","type":"address"},{"indexed":true,"internalType":"address","name":"to","type":"address"},{"indexed":true,"internalType":"uint256","name":"tokenId","type":"uint256"}],"name":"Transfer","type":"event"},{"inputs":[{"internalType":"address","name":"recipient","type":"address"},{"internalType":"string","name":"tokenURI","type":"string"}],"name":"mintNFT","outputs":[{"internalType":"uint256","name":"","type":"uint256"}],"stateMutability":"nonpayable","type":"function"}]"#;

/// A throwaway hardhat project.
struct TestProject {
    dir: TempDir,
}

impl TestProject {
    fn new() -> Self {
        let prj = Self { dir: tempfile::tempdir().unwrap() };
        prj.write("hardhat.config.js", "module.exports = { solidity: \"0.8.1\" };");
        prj
    }

    /// Creates a project with a compiled `MyNFT` artifact in the default location.
    fn with_my_nft() -> Self {
        let prj = Self::new();
        prj.write_artifact("artifacts/contracts/MyNFT.sol/MyNFT.json", "MyNFT", Some(MY_NFT_ABI));
        prj
    }

    fn root(&self) -> &Path {
        self.dir.path()
    }

    fn write(&self, path: impl AsRef<Path>, contents: &str) -> PathBuf {
        let path = self.root().join(path);
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn write_artifact(&self, path: &str, name: &str, abi: Option<&str>) -> PathBuf {
        let abi = abi.map(|abi| format!(r#""abi": {abi},"#)).unwrap_or_default();
        let artifact = format!(
            r#"{{
  "_format": "hh-sol-artifact-1",
  "contractName": "{name}",
  "sourceName": "contracts/{name}.sol",
  {abi}
  "bytecode": "0x60806040",
  "deployedBytecode": "0x60806040",
  "linkReferences": {{}},
  "deployedLinkReferences": {{}}
}}"#
        );
        self.write(path, &artifact)
    }

    /// Returns a `mintkit` command running in the project root with a clean environment.
    fn mintkit(&self) -> Command {
        Command::new(env!("CARGO_BIN_EXE_mintkit"))
            .current_dir(self.root())
            .env_remove("API_URL")
            .env_remove("MINTKIT_RPC_URL")
            .env_remove("MINTKIT_CONTRACT")
            .env_remove("MINTKIT_ARTIFACT")
            .env_remove("MINTKIT_LAYOUT")
            .env_remove("MINTKIT_DEBUG")
            .env_remove("RUST_LOG")
    }
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// tests `--help` is printed to std out
#[test]
fn print_help() {
    let prj = TestProject::new();
    let assert = prj.mintkit().arg("--help").assert().success();
    assert!(stdout(assert.get_output()).contains("Print the ABI of a compiled contract"));
}

// tests that the ABI of the default artifact is printed as a single compact line
#[test]
fn prints_abi_of_default_artifact() {
    let prj = TestProject::with_my_nft();
    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().success();
    assert_eq!(stdout(assert.get_output()), format!("{MY_NFT_ABI}\n"));
}

// tests that the endpoint can be provided through the project's `.env` file
#[test]
fn reads_endpoint_from_dotenv() {
    let prj = TestProject::with_my_nft();
    prj.write(".env", &format!("API_URL=\"{RPC_URL}\"\nPRIVATE_KEY=\"0xabc\"\n"));
    let assert = prj.mintkit().arg("abi").assert().success();
    assert_eq!(stdout(assert.get_output()), format!("{MY_NFT_ABI}\n"));
}

// tests that `.env` is found from a nested directory of the project
#[test]
fn runs_from_scripts_dir() {
    let prj = TestProject::with_my_nft();
    prj.write(".env", &format!("API_URL={RPC_URL}\n"));
    let scripts = prj.write("scripts/mint-nft.js", "").parent().unwrap().to_path_buf();
    let assert = prj.mintkit().current_dir(scripts).arg("abi").assert().success();
    assert_eq!(stdout(assert.get_output()), format!("{MY_NFT_ABI}\n"));
}

// tests that a missing endpoint fails before anything is printed
#[test]
fn missing_endpoint_fails() {
    let prj = TestProject::with_my_nft();
    let assert = prj.mintkit().arg("abi").assert().failure().stdout_eq("");
    let err = stderr(assert.get_output());
    assert!(err.contains("no RPC endpoint configured"), "{err}");
    assert!(err.contains("API_URL"), "{err}");
}

// tests that an unparsable endpoint is rejected
#[test]
fn invalid_endpoint_fails() {
    let prj = TestProject::with_my_nft();
    let assert =
        prj.mintkit().arg("abi").env("API_URL", "not a url").assert().failure().stdout_eq("");
    let err = stderr(assert.get_output());
    assert!(err.contains("invalid provider URL"), "{err}");
}

// tests that a missing artifact fails without output
#[test]
fn missing_artifact_fails() {
    let prj = TestProject::new();
    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().code(1).stdout_eq("");
    let err = stderr(assert.get_output());
    assert!(err.contains("failed to load contract artifact"), "{err}");
    assert!(err.contains("Artifact: "), "{err}");
    assert!(err.contains("MyNFT.json"), "{err}");
    assert!(err.contains("Hint: compile the contracts first"), "{err}");
}

// tests that invalid JSON in the artifact is reported with its path
#[test]
fn malformed_artifact_fails() {
    let prj = TestProject::new();
    prj.write("artifacts/contracts/MyNFT.sol/MyNFT.json", "{ \"abi\": [");
    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().failure().stdout_eq("");
    let err = stderr(assert.get_output());
    assert!(err.contains("failed to deserialize JSON"), "{err}");
}

// tests that an artifact without an `abi` field prints the absent value
#[test]
fn missing_abi_prints_null() {
    let prj = TestProject::new();
    prj.write_artifact("artifacts/contracts/MyNFT.sol/MyNFT.json", "MyNFT", None);

    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().success();
    assert_eq!(stdout(assert.get_output()), "null\n");
    assert!(stderr(assert.get_output()).contains("no `abi` field"));

    prj.mintkit()
        .args(["abi", "--strict"])
        .env("API_URL", RPC_URL)
        .assert()
        .failure()
        .stdout_eq("");
}

// tests that a JSON document other than an object has no `abi`, like any other field lookup
#[test]
fn non_object_artifact_prints_null() {
    let prj = TestProject::new();
    prj.write("artifacts/contracts/MyNFT.sol/MyNFT.json", "[1, 2]");

    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().success();
    assert_eq!(stdout(assert.get_output()), "null\n");
    assert!(stderr(assert.get_output()).contains("no `abi` field"));

    prj.mintkit()
        .args(["abi", "--strict"])
        .env("API_URL", RPC_URL)
        .assert()
        .failure()
        .stdout_eq("");

    prj.write("artifacts/contracts/MyNFT.sol/MyNFT.json", "null");
    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().failure().stdout_eq("");
    assert!(stderr(assert.get_output()).contains("contains `null`"));
}

// tests that an artifact starting with a byte order mark is accepted
#[test]
fn accepts_byte_order_mark() {
    let prj = TestProject::new();
    prj.write(
        "artifacts/contracts/MyNFT.sol/MyNFT.json",
        &format!("\u{feff}{{\"contractName\":\"MyNFT\",\"abi\":{MY_NFT_ABI}}}"),
    );
    let assert = prj.mintkit().arg("abi").env("API_URL", RPC_URL).assert().success();
    assert_eq!(stdout(assert.get_output()), format!("{MY_NFT_ABI}\n"));
}

// tests that `--root` selects the project and its `.env` from another working directory
#[test]
fn runs_with_root_from_other_dir() {
    let prj = TestProject::with_my_nft();
    prj.write(".env", &format!("API_URL={RPC_URL}\n"));
    let elsewhere = tempfile::tempdir().unwrap();

    let assert = prj
        .mintkit()
        .current_dir(elsewhere.path())
        .arg("abi")
        .arg("--root")
        .arg(prj.root())
        .assert()
        .success();
    assert_eq!(stdout(assert.get_output()), format!("{MY_NFT_ABI}\n"));

    // without `--root` the project is not found
    prj.mintkit().current_dir(elsewhere.path()).arg("abi").assert().failure().stdout_eq("");
}

// tests that other contracts and explicit artifact paths can be selected
#[test]
fn selects_artifact() {
    let prj = TestProject::with_my_nft();
    prj.write_artifact("out/Token.sol/Token.json", "Token", Some("[]"));
    let custom = prj.write_artifact("build/Custom.json", "Custom", Some(r#"[{"type":"fallback"}]"#));

    let assert = prj
        .mintkit()
        .args(["abi", "Token", "--layout", "foundry", "--rpc-url", RPC_URL])
        .assert()
        .success();
    assert_eq!(stdout(assert.get_output()), "[]\n");

    let assert = prj
        .mintkit()
        .args(["abi", "--artifact"])
        .arg(&custom)
        .env("API_URL", RPC_URL)
        .assert()
        .success();
    assert_eq!(stdout(assert.get_output()), "[{\"type\":\"fallback\"}]\n");
}

// tests that the config file selects the contract
#[test]
fn reads_config_file() {
    let prj = TestProject::new();
    prj.write_artifact("artifacts/contracts/Token.sol/Token.json", "Token", Some("[]"));
    prj.write("mintkit.toml", &format!("rpc_url = \"{RPC_URL}\"\ncontract = \"Token\"\n"));

    let assert = prj.mintkit().arg("abi").assert().success();
    assert_eq!(stdout(assert.get_output()), "[]\n");
}

// tests that the ABI can be rendered as a Solidity interface
#[test]
fn prints_solidity_interface() {
    let prj = TestProject::with_my_nft();
    let assert =
        prj.mintkit().args(["abi", "--format", "sol"]).env("API_URL", RPC_URL).assert().success();
    let out = stdout(assert.get_output());
    assert!(out.starts_with("interface MyNFT {"), "{out}");
    assert!(out.contains("event Transfer("), "{out}");
    assert!(out.contains("function mintNFT("), "{out}");
    assert!(out.ends_with("}\n"), "{out}");
}

// tests that `mintkit config` shows the resolved values
#[test]
fn prints_config() {
    let prj = TestProject::new();
    let assert = prj.mintkit().arg("config").env("API_URL", RPC_URL).assert().success();
    let out = stdout(assert.get_output());
    assert!(out.contains(&format!("rpc_url = \"{RPC_URL}\"")), "{out}");
    assert!(out.contains("contract = \"MyNFT\""), "{out}");

    let assert = prj.mintkit().args(["config", "--json", "--retries", "3"]).assert().success();
    let json: serde_json::Value = serde_json::from_str(&stdout(assert.get_output())).unwrap();
    assert_eq!(json["max_retry"], 3);
    assert!(json.get("rpc_url").is_none());
}
