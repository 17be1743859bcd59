// Code generated by typed712-bind for package `eip712_types`. DO NOT EDIT.

/// `MintVehicleSign(uint256 manufacturerNode,address owner,string[] attributes,string[] infos,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct MintVehicleSign {
    #[serde(rename = "manufacturerNode")]
    pub manufacturer_node: typed712::U256,
    #[serde(rename = "owner")]
    pub owner: typed712::Address,
    #[serde(rename = "attributes")]
    pub attributes: ::std::vec::Vec<::std::string::String>,
    #[serde(rename = "infos")]
    pub infos: ::std::vec::Vec<::std::string::String>,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for MintVehicleSign {
    fn name(&self) -> &str {
        "MintVehicleSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("manufacturerNode", "uint256"),
            typed712::TypeField::new("owner", "address"),
            typed712::TypeField::new("attributes", "string[]"),
            typed712::TypeField::new("infos", "string[]"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "manufacturerNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.manufacturer_node)),
            ),
            (
                "owner".to_owned(),
                typed712::Value::String(typed712::checksum(&self.owner)),
            ),
            (
                "attributes".to_owned(),
                any_slice(&self.attributes),
            ),
            (
                "infos".to_owned(),
                any_slice(&self.infos),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl MintVehicleSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("MintVehicleSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "MintVehicleSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `UnPairAftermarketDeviceSign(uint256 aftermarketDeviceNode,uint256 vehicleNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct UnPairAftermarketDeviceSign {
    #[serde(rename = "aftermarketDeviceNode")]
    pub aftermarket_device_node: typed712::U256,
    #[serde(rename = "vehicleNode")]
    pub vehicle_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for UnPairAftermarketDeviceSign {
    fn name(&self) -> &str {
        "UnPairAftermarketDeviceSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("aftermarketDeviceNode", "uint256"),
            typed712::TypeField::new("vehicleNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "aftermarketDeviceNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.aftermarket_device_node)),
            ),
            (
                "vehicleNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.vehicle_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl UnPairAftermarketDeviceSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("UnPairAftermarketDeviceSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "UnPairAftermarketDeviceSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `ClaimAftermarketDeviceSign(uint256 aftermarketDeviceNode,address owner,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct ClaimAftermarketDeviceSign {
    #[serde(rename = "aftermarketDeviceNode")]
    pub aftermarket_device_node: typed712::U256,
    #[serde(rename = "owner")]
    pub owner: typed712::Address,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for ClaimAftermarketDeviceSign {
    fn name(&self) -> &str {
        "ClaimAftermarketDeviceSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("aftermarketDeviceNode", "uint256"),
            typed712::TypeField::new("owner", "address"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "aftermarketDeviceNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.aftermarket_device_node)),
            ),
            (
                "owner".to_owned(),
                typed712::Value::String(typed712::checksum(&self.owner)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl ClaimAftermarketDeviceSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("ClaimAftermarketDeviceSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "ClaimAftermarketDeviceSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `PairAftermarketDeviceSign(uint256 aftermarketDeviceNode,uint256 vehicleNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct PairAftermarketDeviceSign {
    #[serde(rename = "aftermarketDeviceNode")]
    pub aftermarket_device_node: typed712::U256,
    #[serde(rename = "vehicleNode")]
    pub vehicle_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for PairAftermarketDeviceSign {
    fn name(&self) -> &str {
        "PairAftermarketDeviceSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("aftermarketDeviceNode", "uint256"),
            typed712::TypeField::new("vehicleNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "aftermarketDeviceNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.aftermarket_device_node)),
            ),
            (
                "vehicleNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.vehicle_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl PairAftermarketDeviceSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("PairAftermarketDeviceSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "PairAftermarketDeviceSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `MintSyntheticDeviceSign(uint256 integrationNode,uint256 vehicleNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct MintSyntheticDeviceSign {
    #[serde(rename = "integrationNode")]
    pub integration_node: typed712::U256,
    #[serde(rename = "vehicleNode")]
    pub vehicle_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for MintSyntheticDeviceSign {
    fn name(&self) -> &str {
        "MintSyntheticDeviceSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("integrationNode", "uint256"),
            typed712::TypeField::new("vehicleNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "integrationNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.integration_node)),
            ),
            (
                "vehicleNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.vehicle_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl MintSyntheticDeviceSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("MintSyntheticDeviceSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "MintSyntheticDeviceSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `MintVehicleAndSdSign(uint256 integrationNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct MintVehicleAndSdSign {
    #[serde(rename = "integrationNode")]
    pub integration_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for MintVehicleAndSdSign {
    fn name(&self) -> &str {
        "MintVehicleAndSdSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("integrationNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "integrationNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.integration_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl MintVehicleAndSdSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("MintVehicleAndSdSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "MintVehicleAndSdSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `MintVehicleWithDeviceDefinitionSign(uint256 manufacturerNode,address owner,string deviceDefinitionId,string[] attributes,string[] infos,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct MintVehicleWithDeviceDefinitionSign {
    #[serde(rename = "manufacturerNode")]
    pub manufacturer_node: typed712::U256,
    #[serde(rename = "owner")]
    pub owner: typed712::Address,
    #[serde(rename = "deviceDefinitionId")]
    pub device_definition_id: ::std::string::String,
    #[serde(rename = "attributes")]
    pub attributes: ::std::vec::Vec<::std::string::String>,
    #[serde(rename = "infos")]
    pub infos: ::std::vec::Vec<::std::string::String>,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for MintVehicleWithDeviceDefinitionSign {
    fn name(&self) -> &str {
        "MintVehicleWithDeviceDefinitionSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("manufacturerNode", "uint256"),
            typed712::TypeField::new("owner", "address"),
            typed712::TypeField::new("deviceDefinitionId", "string"),
            typed712::TypeField::new("attributes", "string[]"),
            typed712::TypeField::new("infos", "string[]"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "manufacturerNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.manufacturer_node)),
            ),
            (
                "owner".to_owned(),
                typed712::Value::String(typed712::checksum(&self.owner)),
            ),
            (
                "deviceDefinitionId".to_owned(),
                typed712::Value::from(self.device_definition_id.clone()),
            ),
            (
                "attributes".to_owned(),
                any_slice(&self.attributes),
            ),
            (
                "infos".to_owned(),
                any_slice(&self.infos),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl MintVehicleWithDeviceDefinitionSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("MintVehicleWithDeviceDefinitionSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "MintVehicleWithDeviceDefinitionSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `BurnSyntheticDeviceSign(uint256 vehicleNode,uint256 syntheticDeviceNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct BurnSyntheticDeviceSign {
    #[serde(rename = "vehicleNode")]
    pub vehicle_node: typed712::U256,
    #[serde(rename = "syntheticDeviceNode")]
    pub synthetic_device_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for BurnSyntheticDeviceSign {
    fn name(&self) -> &str {
        "BurnSyntheticDeviceSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("vehicleNode", "uint256"),
            typed712::TypeField::new("syntheticDeviceNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "vehicleNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.vehicle_node)),
            ),
            (
                "syntheticDeviceNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.synthetic_device_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl BurnSyntheticDeviceSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("BurnSyntheticDeviceSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "BurnSyntheticDeviceSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// `BurnVehicleSign(uint256 vehicleNode,uint256 nonce)`
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    typed712::serde::Serialize,
    typed712::serde::Deserialize
)]
#[serde(crate = "typed712::serde")]
pub struct BurnVehicleSign {
    #[serde(rename = "vehicleNode")]
    pub vehicle_node: typed712::U256,
    #[serde(rename = "nonce")]
    pub nonce: typed712::U256,
}
impl typed712::TypedData for BurnVehicleSign {
    fn name(&self) -> &str {
        "BurnVehicleSign"
    }
    fn r#type(&self) -> ::std::vec::Vec<typed712::TypeField> {
        ::std::vec![
            typed712::TypeField::new("vehicleNode", "uint256"),
            typed712::TypeField::new("nonce", "uint256"),
        ]
    }
    fn message(&self) -> typed712::Message {
        [
            (
                "vehicleNode".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.vehicle_node)),
            ),
            (
                "nonce".to_owned(),
                typed712::Value::String(typed712::encode_big(&self.nonce)),
            ),
        ]
            .into_iter()
            .collect()
    }
}
impl BurnVehicleSign {
    /// Compute the EIP-712 digest of this message bound to `domain`.
    pub fn typed_data_and_hash(
        &self,
        domain: &typed712::Domain,
    ) -> typed712::Result<typed712::H256> {
        let envelope = typed712::TypedDataEnvelope {
            types: [
                (
                    "EIP712Domain".to_owned(),
                    ::std::vec![
                        typed712::TypeField::new("name", "string"),
                        typed712::TypeField::new("version", "string"),
                        typed712::TypeField::new("chainId", "uint256"),
                        typed712::TypeField::new("verifyingContract", "address"),
                    ],
                ),
                ("BurnVehicleSign".to_owned(), typed712::TypedData::r#type(self)),
            ]
                .into_iter()
                .collect(),
            primary_type: "BurnVehicleSign".to_owned(),
            domain: domain.clone(),
            message: typed712::TypedData::message(self),
        };
        envelope.hash()
    }
}
/// Widen a homogeneous slice into a sequence of dynamic values.
fn any_slice<T>(values: &[T]) -> typed712::Value
where
    T: ::core::clone::Clone + ::core::convert::Into<typed712::Value>,
{
    typed712::Value::Array(
        values.iter().cloned().map(::core::convert::Into::into).collect(),
    )
}
