//! CLI end-to-end tests

#[cfg(test)]
mod tests {
    use crate::common::*;
    use std::path::Path;
    use std::process::{Command, Output};

    fn run(args: &[&str]) -> Output {
        run_with_env(args, &[])
    }

    fn run_with_env(args: &[&str], vars: &[(&str, &str)]) -> Output {
        let mut command = Command::new(env!("CARGO_BIN_EXE_infra-preflight"));
        command.args(args);
        for var in [
            "RUST_LOG",
            "PREFLIGHT_SETTINGS",
            "PREFLIGHT_PROBE_TIMEOUT",
            "PREFLIGHT_LOG_LEVEL",
            "PREFLIGHT_LOG_FORMAT",
            "PREFLIGHT_OUTPUT_FORMAT",
        ] {
            command.env_remove(var);
        }
        command.envs(vars.iter().copied());
        command.output().expect("failed to run infra-preflight")
    }

    fn write(dir: &Path, name: &str, content: &str) -> String {
        let path = dir.join(name);
        std::fs::write(&path, content).unwrap();
        path.to_string_lossy().into_owned()
    }

    fn state(dir: &Path) -> String {
        write(dir, "state.yaml", &snapshot().to_yaml().unwrap())
    }

    fn valid_config(dir: &Path) -> String {
        write(
            dir,
            "infra.yaml",
            &format!(
                "clusterName: {}\nnetworks:\n  vpc:\n    id: {}\n  zones:\n    - elasticIPAllocationID: {}\n",
                CLUSTER, VPC_ID, EIP_1
            ),
        )
    }

    #[test]
    fn test_validate_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(dir.path());
        let state = state(dir.path());

        let output = run(&[
            "validate",
            "--config",
            &config,
            "--state",
            &state,
            "--timeout-secs",
            "5",
        ]);
        assert_eq!(output.status.code(), Some(0));
        assert_eq!(
            String::from_utf8_lossy(&output.stdout).trim(),
            "configuration is valid"
        );
    }

    #[test]
    fn test_validate_rejects_out_of_range_timeouts() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(dir.path());
        let state = state(dir.path());

        for timeout in ["0", "3601", "18446744073709551615"] {
            let output = run(&[
                "validate",
                "--config",
                &config,
                "--state",
                &state,
                "--timeout-secs",
                timeout,
            ]);
            assert_eq!(output.status.code(), Some(2), "timeout {}", timeout);
            assert!(output.stdout.is_empty());
            assert!(String::from_utf8_lossy(&output.stderr).contains("Probe settings error"));
        }
    }

    #[test]
    fn test_validate_rejects_invalid_env_timeout() {
        let dir = tempfile::tempdir().unwrap();
        let config = valid_config(dir.path());
        let state = state(dir.path());

        let output = run_with_env(
            &["validate", "--config", &config, "--state", &state],
            &[("PREFLIGHT_PROBE_TIMEOUT", "0")],
        );
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_validate_reports_json_findings() {
        let dir = tempfile::tempdir().unwrap();
        let config = write(
            dir.path(),
            "infra.json",
            &format!(
                r#"{{"clusterName":"{}","networks":{{"zones":[{{"elasticIPAllocationID":"{}"}}]}}}}"#,
                CLUSTER, EIP_3
            ),
        );
        let state = state(dir.path());

        let output = run(&["validate", "--config", &config, "--state", &state, "--output", "json"]);
        assert_eq!(output.status.code(), Some(1));

        let findings: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(findings[0]["type"], "Invalid");
        assert_eq!(findings[0]["badValue"], EIP_3);
    }

    #[test]
    fn test_validate_missing_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());

        let output = run(&["validate", "--config", "/nonexistent/infra.yaml", "--state", &state]);
        assert_eq!(output.status.code(), Some(2));
    }

    #[test]
    fn test_add_route_updates_snapshot() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());

        let output = run(&[
            "add-route",
            "--state",
            &state,
            "--vpc-id",
            VPC_ID,
            "--gateway-id",
            "igw-0123",
            "--destination",
            "198.51.100.0/24",
        ]);
        assert_eq!(output.status.code(), Some(0));

        let saved = std::fs::read_to_string(&state).unwrap();
        assert!(saved.contains("198.51.100.0/24"));
    }

    #[test]
    fn test_add_route_unknown_vpc_is_an_operation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let state = state(dir.path());
        let before = std::fs::read_to_string(&state).unwrap();

        let output = run(&[
            "add-route",
            "--state",
            &state,
            "--vpc-id",
            "vpc-unknown",
            "--gateway-id",
            "igw-0123",
            "--destination",
            "0.0.0.0/0",
        ]);
        assert_eq!(output.status.code(), Some(3));
        assert!(
            String::from_utf8_lossy(&output.stderr)
                .contains("expected 1 route table for vpc but got 0")
        );
        assert_eq!(std::fs::read_to_string(&state).unwrap(), before);
    }

    #[test]
    fn test_add_route_missing_state_is_an_input_failure() {
        let output = run(&[
            "add-route",
            "--state",
            "/nonexistent/state.yaml",
            "--vpc-id",
            VPC_ID,
            "--gateway-id",
            "igw-0123",
            "--destination",
            "0.0.0.0/0",
        ]);
        assert_eq!(output.status.code(), Some(2));
    }
}
