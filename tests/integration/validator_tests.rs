//! Validator integration tests
//!
//! Probe interactions are asserted with `mockall`: every expectation
//! carries an exact call count, and unexpected calls fail the test.

#[cfg(test)]
mod tests {
    use crate::common::*;
    use infra_preflight::{
        ConfigValidator, ErrorKind, ErrorList, NetworkConfig, ProbeError, ValidationContext,
        VpcAttribute, ZoneConfig,
    };
    use mockall::predicate::eq;
    use std::sync::Arc;

    async fn validate(probe: MockProbe, config: &NetworkConfig) -> ErrorList {
        ConfigValidator::new(Arc::new(probe))
            .validate(&ValidationContext::background(), config)
            .await
    }

    fn with_eips(config: NetworkConfig) -> NetworkConfig {
        eip_config()
            .zones
            .into_iter()
            .fold(config, |config, zone| config.with_zone(zone))
    }

    // ==================== VPC checks ====================

    #[tokio::test]
    async fn test_vpc_not_found() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_vpc_attribute()
            .with(eq(VPC_ID), eq(VpcAttribute::EnableDnsSupport))
            .times(1)
            .returning(|id, _| Err(ProbeError::not_found("VPC", id)));

        // Zones are declared, yet no allocation lookup may happen.
        let errors = validate(probe, &with_eips(vpc_config())).await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.field, "networks.vpc.id");
        assert_eq!(err.detail, "VPC does not exist");
    }

    #[tokio::test]
    async fn test_vpc_wrong_attributes_and_no_gateway() {
        let mut probe = MockProbe::new();
        probe.expect_vpc(VPC_ID, false, false, None);

        let errors = validate(probe, &vpc_config()).await;

        let found: Vec<_> = errors
            .iter()
            .map(|e| (e.kind, e.field.as_str(), e.detail.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (
                    ErrorKind::Invalid,
                    "networks.vpc.id",
                    "VPC attribute enableDnsSupport must be set to true"
                ),
                (
                    ErrorKind::Invalid,
                    "networks.vpc.id",
                    "VPC attribute enableDnsHostnames must be set to true"
                ),
                (
                    ErrorKind::Invalid,
                    "networks.vpc.id",
                    "no attached internet gateway found"
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_valid_vpc() {
        let mut probe = MockProbe::new();
        probe.expect_vpc(VPC_ID, true, true, Some("igw-0123"));

        let errors = validate(probe, &vpc_config()).await;
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_vpc_attribute_internal_error() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_vpc_attribute()
            .times(1)
            .returning(|_, _| Err(ProbeError::transport("test")));

        let errors = validate(probe, &with_eips(vpc_config())).await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.field, "networks.vpc.id");
        assert_eq!(
            err.detail,
            format!("could not get VPC attribute enableDnsSupport for VPC {}: test", VPC_ID)
        );
    }

    #[tokio::test]
    async fn test_internet_gateway_failure_skips_address_checks() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_vpc_attribute()
            .times(2)
            .returning(|_, _| Ok(true));
        probe
            .expect_get_internet_gateway()
            .with(eq(VPC_ID))
            .times(1)
            .returning(|_| Err(ProbeError::transport("UnauthorizedOperation")));
        probe.expect_get_address_associations().times(0);
        probe.expect_get_owned_address_allocations().times(0);

        let errors = validate(probe, &with_eips(vpc_config())).await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.field, "networks.vpc.id");
        assert_eq!(
            err.detail,
            format!(
                "could not get internet gateway for VPC {}: UnauthorizedOperation",
                VPC_ID
            )
        );
    }

    // ==================== Elastic IP checks ====================

    #[tokio::test]
    async fn test_no_eips_configured() {
        let probe = MockProbe::new();
        let errors = validate(probe, &NetworkConfig::new(CLUSTER)).await;
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn test_eips_associated_to_own_nat_gateways() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_address_associations()
            .times(1)
            .returning(|_| {
                Ok(associations(&[
                    (EIP_1, Some("eipassoc-0f8ff66536587824b")),
                    (EIP_2, Some("eipassoc-0f8ff66536587824c")),
                    (EIP_3, Some("eipassoc-0f8ff66536587824d")),
                ]))
            });
        probe
            .expect_get_owned_address_allocations()
            .with(eq(CLUSTER))
            .times(1)
            .returning(|_| Ok(owned(&[EIP_1, EIP_2, EIP_3])));

        assert!(validate(probe, &eip_config()).await.is_empty());
    }

    #[tokio::test]
    async fn test_eips_unassociated_skip_ownership_lookup() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_address_associations()
            .times(1)
            .returning(|_| Ok(associations(&[(EIP_1, None), (EIP_2, None), (EIP_3, None)])));
        probe.expect_get_owned_address_allocations().times(0);

        assert!(validate(probe, &eip_config()).await.is_empty());
    }

    #[tokio::test]
    async fn test_eips_do_not_exist() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_address_associations()
            .withf(|ids| ids.to_vec() == all_eips())
            .times(1)
            .returning(|_| Ok(associations(&[])));
        probe.expect_get_owned_address_allocations().times(0);

        let errors = validate(probe, &eip_config()).await;

        let bad_values: Vec<_> = errors.iter().filter_map(|e| e.bad_value.as_deref()).collect();
        assert_eq!(bad_values, vec![EIP_1, EIP_2, EIP_3]);
        for err in &errors {
            assert_eq!(err.kind, ErrorKind::Invalid);
            assert_eq!(err.field, "networks.zones[].elasticIPAllocationID");
            assert!(err.detail.contains("cannot be used as it does not exist"));
        }
    }

    #[tokio::test]
    async fn test_some_eips_do_not_exist() {
        let mut probe = MockProbe::new();
        probe.expect_get_address_associations().times(1).returning(|_| {
            Ok(associations(&[
                (EIP_1, Some("eipassoc-0f8ff66536587824b")),
                (EIP_2, Some("eipassoc-0f8ff66536587824c")),
            ]))
        });
        probe
            .expect_get_owned_address_allocations()
            .times(1)
            .returning(|_| Ok(owned(&[EIP_1, EIP_2])));

        let errors = validate(probe, &eip_config()).await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.bad_value.as_deref(), Some(EIP_3));
        assert!(err.detail.contains("cannot be used as it does not exist"));
    }

    #[tokio::test]
    async fn test_eip_associated_with_another_resource() {
        let mut probe = MockProbe::new();
        probe.expect_get_address_associations().times(1).returning(|_| {
            Ok(associations(&[
                (EIP_1, Some("eipassoc-0f8ff66536587824b")),
                (EIP_2, Some("eipassoc-0f8ff66536587824c")),
                (EIP_3, Some("eipassoc-0f8ff66536587824d")),
            ]))
        });
        probe
            .expect_get_owned_address_allocations()
            .times(1)
            .returning(|_| Ok(owned(&[EIP_1, EIP_2])));

        let errors = validate(probe, &eip_config()).await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.kind, ErrorKind::Invalid);
        assert_eq!(err.field, "networks.zones[].elasticIPAllocationID");
        assert_eq!(err.bad_value.as_deref(), Some(EIP_3));
        assert!(
            err.detail
                .contains("cannot be attached to the cluster's NAT Gateway(s) as it is already associated")
        );
    }

    #[tokio::test]
    async fn test_association_lookup_failure_after_vpc_findings() {
        let mut probe = MockProbe::new();
        probe.expect_vpc(VPC_ID, false, true, Some("igw-0123"));
        probe
            .expect_get_address_associations()
            .times(1)
            .returning(|_| Err(ProbeError::transport("RequestLimitExceeded")));
        probe.expect_get_owned_address_allocations().times(0);

        let errors = validate(probe, &with_eips(vpc_config())).await;

        let found: Vec<_> = errors.iter().map(|e| (e.kind, e.field.as_str())).collect();
        assert_eq!(
            found,
            vec![
                (ErrorKind::Invalid, "networks.vpc.id"),
                (ErrorKind::Internal, "networks.zones"),
            ]
        );
        assert_eq!(
            errors.as_slice()[1].detail,
            "failed to get Elastic IP addresses: RequestLimitExceeded"
        );
    }

    #[tokio::test]
    async fn test_empty_allocation_ids_are_ignored() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_address_associations()
            .withf(|ids| ids.to_vec() == vec![EIP_2.to_string()])
            .times(1)
            .returning(|_| Ok(associations(&[(EIP_2, None)])));

        let config = NetworkConfig::new(CLUSTER)
            .with_zone(ZoneConfig::default())
            .with_zone(ZoneConfig::with_allocation(EIP_2))
            .with_zone(ZoneConfig::with_allocation(""));
        assert!(validate(probe, &config).await.is_empty());
    }

    // ==================== Cross-cutting properties ====================

    #[tokio::test]
    async fn test_validation_is_idempotent() {
        let mut probe = MockProbe::new();
        probe
            .expect_get_vpc_attribute()
            .times(4)
            .returning(|_, attr| Ok(attr == VpcAttribute::EnableDnsHostnames));
        probe
            .expect_get_internet_gateway()
            .times(2)
            .returning(|_| Ok(Some("igw-0123".to_string())));
        probe
            .expect_get_address_associations()
            .times(2)
            .returning(|_| Ok(associations(&[(EIP_1, Some("eipassoc-x")), (EIP_2, None)])));
        probe
            .expect_get_owned_address_allocations()
            .times(2)
            .returning(|_| Ok(owned(&[])));

        let validator = ConfigValidator::new(Arc::new(probe));
        let ctx = ValidationContext::background();
        let config = with_eips(vpc_config());

        let first = validator.validate(&ctx, &config).await;
        let second = validator.validate(&ctx, &config).await;

        assert_eq!(first, second);
        assert_eq!(first.len(), 3);
    }

    #[tokio::test]
    async fn test_expired_deadline_reports_internal() {
        let probe = MockProbe::new();
        let ctx = ValidationContext::background().with_deadline(tokio::time::Instant::now());

        let errors = ConfigValidator::new(Arc::new(probe))
            .validate(&ctx, &with_eips(vpc_config()))
            .await;

        assert_eq!(errors.len(), 1);
        let err = &errors.as_slice()[0];
        assert_eq!(err.kind, ErrorKind::Internal);
        assert_eq!(err.field, "networks.vpc.id");
        assert!(err.detail.ends_with("probe call cancelled: deadline exceeded"));
    }
}
