//! Instance metadata categories and the values served by the mock
//!
//! Instance metadata is divided into categories; a category is provided within the request
//! to retrieve its value. A description of each category can be found at:
//! https://docs.aws.amazon.com/AWSEC2/latest/UserGuide/instancedata-data-categories.html

pub const PATH_AMI_ID: &str = "ami-id";
pub const PATH_AMI_LAUNCH_INDEX: &str = "ami-launch-index";
pub const PATH_AMI_MANIFEST_PATH: &str = "ami-manifest-path";
pub const PATH_BLOCK_DEVICE_MAPPING_AMI: &str = "block-device-mapping/ami";
pub const PATH_BLOCK_DEVICE_MAPPING_EBS0: &str = "block-device-mapping/ebs0";
pub const PATH_BLOCK_DEVICE_MAPPING_EPHEMERAL0: &str = "block-device-mapping/ephemeral0";
pub const PATH_BLOCK_DEVICE_MAPPING_ROOT: &str = "block-device-mapping/root";
pub const PATH_BLOCK_DEVICE_MAPPING_SWAP: &str = "block-device-mapping/swap";
pub const PATH_ELASTIC_INFERENCE_ASSOCIATION: &str =
  "elastic-inference/associations/eia-bfa21c7904f64a82a21b9f4540169ce1";
pub const PATH_EVENTS_MAINTENANCE_SCHEDULED: &str = "events/maintenance/scheduled";
pub const PATH_EVENTS_RECOMMENDATIONS_REBALANCE: &str = "events/recommendations/rebalance";
pub const PATH_HOSTNAME: &str = "hostname";
pub const PATH_IAM_INFO: &str = "iam/info";
pub const PATH_IAM_SECURITY_CREDENTIALS: &str = "iam/security-credentials/baskinc-role";
pub const PATH_INSTANCE_ACTION: &str = "instance-action";
pub const PATH_INSTANCE_ID: &str = "instance-id";
pub const PATH_INSTANCE_LIFECYCLE: &str = "instance-life-cycle";
pub const PATH_INSTANCE_TYPE: &str = "instance-type";
pub const PATH_KERNEL_ID: &str = "kernel-id";
pub const PATH_LOCAL_HOSTNAME: &str = "local-hostname";
pub const PATH_LOCAL_IPV4: &str = "local-ipv4";
pub const PATH_MAC: &str = "mac";
pub const PATH_NETWORK_INTERFACES_0_DEVICE_NUMBER: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/device-number";
pub const PATH_NETWORK_INTERFACES_0_INTERFACE_ID: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/interface-id";
pub const PATH_NETWORK_INTERFACES_0_IPV4_ASSOCIATIONS: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/ipv4-associations/192.0.2.54";
pub const PATH_NETWORK_INTERFACES_0_IPV6S: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/ipv6s";
pub const PATH_NETWORK_INTERFACES_0_LOCAL_HOSTNAME: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/local-hostname";
pub const PATH_NETWORK_INTERFACES_0_LOCAL_IPV4S: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/local-ipv4s";
pub const PATH_NETWORK_INTERFACES_0_MAC: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/mac";
pub const PATH_NETWORK_INTERFACES_0_NETWORK_CARD_INDEX: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/network-card-index";
pub const PATH_NETWORK_INTERFACES_0_OWNER_ID: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/owner-id";
pub const PATH_NETWORK_INTERFACES_0_PUBLIC_HOSTNAME: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/public-hostname";
pub const PATH_NETWORK_INTERFACES_0_PUBLIC_IPV4S: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/public-ipv4s";
pub const PATH_NETWORK_INTERFACES_0_SECURITY_GROUPS: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/security-groups";
pub const PATH_NETWORK_INTERFACES_0_SECURITY_GROUP_IDS: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/security-group-ids";
pub const PATH_NETWORK_INTERFACES_0_SUBNET_ID: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/subnet-id";
pub const PATH_NETWORK_INTERFACES_0_SUBNET_IPV4_CIDR_BLOCK: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/subnet-ipv4-cidr-block";
pub const PATH_NETWORK_INTERFACES_0_SUBNET_IPV6_CIDR_BLOCKS: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/subnet-ipv6-cidr-blocks";
pub const PATH_NETWORK_INTERFACES_0_VPC_ID: &str = "network/interfaces/macs/0e:49:61:0f:c3:11/vpc-id";
pub const PATH_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCK: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/vpc-ipv4-cidr-block";
pub const PATH_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCKS: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/vpc-ipv4-cidr-blocks";
pub const PATH_NETWORK_INTERFACES_0_VPC_IPV6_CIDR_BLOCKS: &str =
  "network/interfaces/macs/0e:49:61:0f:c3:11/vpc-ipv6-cidr-blocks";
pub const PATH_PLACEMENT_AVAILABILITY_ZONE: &str = "placement/availability-zone";
pub const PATH_PLACEMENT_AVAILABILITY_ZONE_ID: &str = "placement/availability-zone-id";
pub const PATH_PLACEMENT_GROUP_NAME: &str = "placement/group-name";
pub const PATH_PLACEMENT_HOST_ID: &str = "placement/host-id";
pub const PATH_PLACEMENT_PARTITION_NUMBER: &str = "placement/partition-number";
pub const PATH_PLACEMENT_REGION: &str = "placement/region";
pub const PATH_PRODUCT_CODES: &str = "product-codes";
pub const PATH_PUBLIC_HOSTNAME: &str = "public-hostname";
pub const PATH_PUBLIC_IPV4: &str = "public-ipv4";
pub const PATH_PUBLIC_KEYS_0_OPENSSH_KEY: &str = "public-keys/0/openssh-key";
pub const PATH_RAMDISK_ID: &str = "ramdisk-id";
pub const PATH_RESERVATION_ID: &str = "reservation-id";
pub const PATH_SECURITY_GROUPS: &str = "security-groups";
pub const PATH_SERVICES_DOMAIN: &str = "services/domain";
pub const PATH_SERVICES_PARTITION: &str = "services/partition";
pub const PATH_SPOT_INSTANCE_ACTION: &str = "spot/instance-action";
pub const PATH_SPOT_TERMINATION_TIME: &str = "spot/termination-time";
pub const PATH_TAGS_INSTANCE: &str = "tags/instance";

pub const VALUE_AMI_ID: &str = "ami-0a887e401f7654935";
pub const VALUE_AMI_LAUNCH_INDEX: &str = "0";
pub const VALUE_AMI_MANIFEST_PATH: &str = "(unknown)";
pub const VALUE_BLOCK_DEVICE_MAPPING_AMI: &str = "/dev/xvda";
pub const VALUE_BLOCK_DEVICE_MAPPING_EBS0: &str = "sdb";
pub const VALUE_BLOCK_DEVICE_MAPPING_EPHEMERAL0: &str = "sdb";
pub const VALUE_BLOCK_DEVICE_MAPPING_ROOT: &str = "/dev/xvda";
pub const VALUE_BLOCK_DEVICE_MAPPING_SWAP: &str = "sdcs";
pub const VALUE_ELASTIC_INFERENCE_ASSOCIATION: &str = r#"{"version_2018_04_12":{"elastic-inference-accelerator-id":"eia-bfa21c7904f64a82a21b9f4540169ce1","elastic-inference-accelerator-type":"eia1.medium"}}"#;
pub const VALUE_EVENTS_MAINTENANCE_SCHEDULED: &str = r#"[{"Code":"system-reboot","Description":"The instance is scheduled for system-reboot","State":"active","EventId":"instance-event-1234567890abcdef0","NotBefore":"11 Jul 2022 09:11:54 GMT","NotAfter":"18 Jul 2022 09:11:54 GMT","NotBeforeDeadline":"20 Jul 2022 09:11:54 GMT"}]"#;
pub const VALUE_EVENTS_RECOMMENDATIONS_REBALANCE: &str = r#"{"noticeTime":"2022-07-11T10:20:22Z"}"#;
pub const VALUE_HOSTNAME: &str = "ip-172-16-34-43.ec2.internal";
pub const VALUE_IAM_INFO: &str = r#"{"Code":"Success","LastUpdated":"2020-04-02T18:50:40Z","InstanceProfileArn":"arn:aws:iam::896453262835:instance-profile/baskinc-role","InstanceProfileId":"AIPA5BOGHHXZELSK34VU4"}"#;
pub const VALUE_IAM_SECURITY_CREDENTIALS: &str = r#"{"Code":"Success","LastUpdated":"2020-04-02T18:50:40Z","Type":"AWS-HMAC","AccessKeyId":"12345678901","SecretAccessKey":"v/12345678901","Token":"TEST92test48TEST+y6RpoTEST92test48TEST/8oWVAiBqTEsT5Ky7ty2tEStxC1T==","Expiration":"2020-04-02T00:49:51Z"}"#;
pub const VALUE_INSTANCE_ACTION: &str = "none";
pub const VALUE_INSTANCE_ID: &str = "i-1234567890abcdef0";
pub const VALUE_INSTANCE_LIFECYCLE: &str = "on-demand";
pub const VALUE_INSTANCE_TYPE: &str = "m4.xlarge";
pub const VALUE_KERNEL_ID: &str = "aki-5c21674b";
pub const VALUE_LOCAL_HOSTNAME: &str = "ip-172-16-34-43.ec2.internal";
pub const VALUE_LOCAL_IPV4: &str = "172.16.34.43";
pub const VALUE_MAC: &str = "0e:49:61:0f:c3:11";
pub const VALUE_NETWORK_INTERFACES_0_DEVICE_NUMBER: &str = "0";
pub const VALUE_NETWORK_INTERFACES_0_INTERFACE_ID: &str = "eni-0f95d3625f5c521cc";
pub const VALUE_NETWORK_INTERFACES_0_IPV4_ASSOCIATIONS: &str = "192.0.2.54";
pub const VALUE_NETWORK_INTERFACES_0_IPV6S: &str = "2001:db8:8:4::2";
pub const VALUE_NETWORK_INTERFACES_0_LOCAL_HOSTNAME: &str = "ip-172-16-34-43.ec2.internal";
pub const VALUE_NETWORK_INTERFACES_0_LOCAL_IPV4S: &str = "172.16.34.43";
pub const VALUE_NETWORK_INTERFACES_0_MAC: &str = "0e:49:61:0f:c3:11";
pub const VALUE_NETWORK_INTERFACES_0_NETWORK_CARD_INDEX: &str = "0";
pub const VALUE_NETWORK_INTERFACES_0_OWNER_ID: &str = "515336597381";
pub const VALUE_NETWORK_INTERFACES_0_PUBLIC_HOSTNAME: &str = "ec2-192-0-2-54.compute-1.amazonaws.com";
pub const VALUE_NETWORK_INTERFACES_0_PUBLIC_IPV4S: &str = "192.0.2.54";
pub const VALUE_NETWORK_INTERFACES_0_SECURITY_GROUPS: &str = "ura-launch-wizard-harry-1";
pub const VALUE_NETWORK_INTERFACES_0_SECURITY_GROUP_IDS: &str = "sg-0b07f8f6cb485d4df";
pub const VALUE_NETWORK_INTERFACES_0_SUBNET_ID: &str = "subnet-0ac62554";
pub const VALUE_NETWORK_INTERFACES_0_SUBNET_IPV4_CIDR_BLOCK: &str = "192.0.2.0/24";
pub const VALUE_NETWORK_INTERFACES_0_SUBNET_IPV6_CIDR_BLOCKS: &str = "2001:db8::/32";
pub const VALUE_NETWORK_INTERFACES_0_VPC_ID: &str = "vpc-d295a6a7";
pub const VALUE_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCK: &str = "192.0.2.0/24";
pub const VALUE_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCKS: &str = "192.0.2.0/24";
pub const VALUE_NETWORK_INTERFACES_0_VPC_IPV6_CIDR_BLOCKS: &str = "2001:db8::/32";
pub const VALUE_PLACEMENT_AVAILABILITY_ZONE: &str = "us-east-1a";
pub const VALUE_PLACEMENT_AVAILABILITY_ZONE_ID: &str = "use1-az4";
pub const VALUE_PLACEMENT_GROUP_NAME: &str = "a-placement-group";
pub const VALUE_PLACEMENT_HOST_ID: &str = "h-0da999999f9999fb9";
pub const VALUE_PLACEMENT_PARTITION_NUMBER: &str = "1";
pub const VALUE_PLACEMENT_REGION: &str = "us-east-1";
pub const VALUE_PRODUCT_CODES: &str = "3iplms73etrdhxdepv72l6ywj";
pub const VALUE_PUBLIC_HOSTNAME: &str = "ec2-192-0-2-54.compute-1.amazonaws.com";
pub const VALUE_PUBLIC_IPV4: &str = "192.0.2.54";
pub const VALUE_PUBLIC_KEYS_0_OPENSSH_KEY: &str = "ssh-rsa AAAAB3NzaC1yc2EAAAADAQABAAABAQC/JxGByvHDHgQAU+0nRFWdvMPi22OgNUn9ansrI8QN1ZJGxD1ML8DRnJ3Q3zFKqqjGucfNWW0xpVib+ttkIBp8G9P/EOcX9C3FF63O3SnnIUHJsp5faRAZsTJPx0G5HUbvhBvnAcCtSqQgmr02c1l582vAWx48pOmeXXMkl9qe9V/s7K3utmeZkRLo9DqnbsDlg5GWxLC/rWKYaZR66CnMEyZ7yBy3v3abKaGGRovLkHNAgWjSSgmUTI1nT5/S2OLxxuDnsC7+BiABLPaqlIE70SzcWZ0swx68Bo2AY9T9ymGqeAM/1T4yRtg0sPB98TpT7WrY5A3iia2UVtLO/xcTt test";
pub const VALUE_RAMDISK_ID: &str = "ari-01bb5768";
pub const VALUE_RESERVATION_ID: &str = "r-046cb3eca3e201d2f";
pub const VALUE_SECURITY_GROUPS: &str = "ura-launch-wizard-harry-1";
pub const VALUE_SERVICES_DOMAIN: &str = "amazonaws.com";
pub const VALUE_SERVICES_PARTITION: &str = "aws";
pub const VALUE_SPOT_INSTANCE_ACTION: &str = r#"{"action":"terminate","time":"2022-07-11T10:25:54Z"}"#;
pub const VALUE_SPOT_TERMINATION_TIME: &str = "2022-07-11T09:58:52Z";
pub const VALUE_TAGS_INSTANCE: &str = "Name\nTest";

/// Plain text categories served by an on-demand instance launched with the default options
pub const CATEGORIES: &[(&str, &str)] = &[
  (PATH_AMI_ID, VALUE_AMI_ID),
  (PATH_AMI_LAUNCH_INDEX, VALUE_AMI_LAUNCH_INDEX),
  (PATH_AMI_MANIFEST_PATH, VALUE_AMI_MANIFEST_PATH),
  (PATH_BLOCK_DEVICE_MAPPING_AMI, VALUE_BLOCK_DEVICE_MAPPING_AMI),
  (PATH_BLOCK_DEVICE_MAPPING_ROOT, VALUE_BLOCK_DEVICE_MAPPING_ROOT),
  (PATH_HOSTNAME, VALUE_HOSTNAME),
  (PATH_INSTANCE_ACTION, VALUE_INSTANCE_ACTION),
  (PATH_INSTANCE_ID, VALUE_INSTANCE_ID),
  (PATH_INSTANCE_LIFECYCLE, VALUE_INSTANCE_LIFECYCLE),
  (PATH_INSTANCE_TYPE, VALUE_INSTANCE_TYPE),
  (PATH_LOCAL_HOSTNAME, VALUE_LOCAL_HOSTNAME),
  (PATH_LOCAL_IPV4, VALUE_LOCAL_IPV4),
  (PATH_MAC, VALUE_MAC),
  (PATH_NETWORK_INTERFACES_0_DEVICE_NUMBER, VALUE_NETWORK_INTERFACES_0_DEVICE_NUMBER),
  (PATH_NETWORK_INTERFACES_0_INTERFACE_ID, VALUE_NETWORK_INTERFACES_0_INTERFACE_ID),
  (PATH_NETWORK_INTERFACES_0_LOCAL_HOSTNAME, VALUE_NETWORK_INTERFACES_0_LOCAL_HOSTNAME),
  (PATH_NETWORK_INTERFACES_0_LOCAL_IPV4S, VALUE_NETWORK_INTERFACES_0_LOCAL_IPV4S),
  (PATH_NETWORK_INTERFACES_0_MAC, VALUE_NETWORK_INTERFACES_0_MAC),
  (PATH_NETWORK_INTERFACES_0_OWNER_ID, VALUE_NETWORK_INTERFACES_0_OWNER_ID),
  (PATH_NETWORK_INTERFACES_0_SECURITY_GROUPS, VALUE_NETWORK_INTERFACES_0_SECURITY_GROUPS),
  (PATH_NETWORK_INTERFACES_0_SECURITY_GROUP_IDS, VALUE_NETWORK_INTERFACES_0_SECURITY_GROUP_IDS),
  (PATH_NETWORK_INTERFACES_0_SUBNET_ID, VALUE_NETWORK_INTERFACES_0_SUBNET_ID),
  (PATH_NETWORK_INTERFACES_0_SUBNET_IPV4_CIDR_BLOCK, VALUE_NETWORK_INTERFACES_0_SUBNET_IPV4_CIDR_BLOCK),
  (PATH_NETWORK_INTERFACES_0_VPC_ID, VALUE_NETWORK_INTERFACES_0_VPC_ID),
  (PATH_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCK, VALUE_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCK),
  (PATH_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCKS, VALUE_NETWORK_INTERFACES_0_VPC_IPV4_CIDR_BLOCKS),
  (PATH_NETWORK_INTERFACES_0_VPC_IPV6_CIDR_BLOCKS, VALUE_NETWORK_INTERFACES_0_VPC_IPV6_CIDR_BLOCKS),
  (PATH_PLACEMENT_AVAILABILITY_ZONE, VALUE_PLACEMENT_AVAILABILITY_ZONE),
  (PATH_PLACEMENT_AVAILABILITY_ZONE_ID, VALUE_PLACEMENT_AVAILABILITY_ZONE_ID),
  (PATH_PLACEMENT_REGION, VALUE_PLACEMENT_REGION),
  (PATH_PUBLIC_KEYS_0_OPENSSH_KEY, VALUE_PUBLIC_KEYS_0_OPENSSH_KEY),
  (PATH_RESERVATION_ID, VALUE_RESERVATION_ID),
  (PATH_SECURITY_GROUPS, VALUE_SECURITY_GROUPS),
  (PATH_SERVICES_DOMAIN, VALUE_SERVICES_DOMAIN),
  (PATH_SERVICES_PARTITION, VALUE_SERVICES_PARTITION),
  (PATH_TAGS_INSTANCE, VALUE_TAGS_INSTANCE),
];

/// JSON categories served by default; compare these structurally as formatting follows the `pretty` option
pub const JSON_CATEGORIES: &[(&str, &str)] = &[
  (PATH_IAM_INFO, VALUE_IAM_INFO),
  (PATH_IAM_SECURITY_CREDENTIALS, VALUE_IAM_SECURITY_CREDENTIALS),
];

/// Expected value of a category served by default
pub fn value(path: &str) -> Option<&'static str> {
  CATEGORIES
    .iter()
    .chain(JSON_CATEGORIES)
    .find(|(p, _)| *p == path)
    .map(|(_, v)| *v)
}

/// Path of a single instance tag, i.e. `tags/instance/Name`
pub fn instance_tag_path(key: &str) -> String {
  format!("{PATH_TAGS_INSTANCE}/{key}")
}
