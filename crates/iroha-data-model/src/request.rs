// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Building signed query requests and reading paginated results.
//!
//! A request is `VersionedSignedQueryRequest::V1(SignedQueryRequest)`; the
//! signature covers the encoded `Payload`. A response is
//! `VersionedPaginatedQueryResult::V1(PaginatedQueryResult)`.

use crate::convert::{FromValue, ToValue};
use crate::crypto::SignatureOf;
use crate::error::{RequestError, Result};
use crate::expression::evaluates_to_raw;
use crate::ids::AccountId;
use crate::pagination::{Pagination, Sorting};
use crate::paths::*;
use crate::predicate::PredicateBox;
use crate::query::find_query;
use crate::signing::Signer;
use crate::value::LedgerValue;
use iroha_schema::{Schema, Value};
use std::time::{SystemTime, UNIX_EPOCH};

/// Milliseconds since the Unix epoch; zero if the clock is before it.
pub fn current_timestamp_ms() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Build a `QueryBox` value.
///
/// `args` are `(field, value)` pairs in any order; each value is a dynamic
/// ledger value and is wrapped as `EvaluatesTo(Raw(value))`.
pub fn query<'a>(
    schema: &Schema,
    name: &str,
    args: impl IntoIterator<Item = (&'a str, Value)>,
) -> Result<Value> {
    let (_, decl) = find_query(name).ok_or_else(|| RequestError::UnknownQuery(name.to_string()))?;
    let mut args: Vec<(&str, Value)> = args.into_iter().collect();

    if let Some((unknown, _)) = args.iter().find(|(a, _)| !decl.fields.iter().any(|f| f == a)) {
        return Err(RequestError::UnknownArgument {
            query: name.to_string(),
            argument: unknown.to_string(),
        });
    }
    if args.len() != decl.fields.len() {
        return Err(RequestError::ArgumentCount {
            query: name.to_string(),
            expected: decl.fields.len(),
            found: args.len(),
        });
    }

    let payload = if decl.is_no_args() {
        Value::empty_tuple()
    } else {
        let mut fields = Vec::with_capacity(decl.fields.len());
        for field in decl.fields {
            let pos = args
                .iter()
                .position(|(a, _)| a == field)
                .ok_or_else(|| RequestError::MissingArgument {
                    query: name.to_string(),
                    argument: field.to_string(),
                })?;
            let (_, value) = args.swap_remove(pos);
            fields.push((*field, evaluates_to_raw(schema, value)?));
        }
        Value::structure(fields)
    };

    let ty = schema.type_id(QUERY_BOX)?;
    Ok(schema.variant(ty, name, payload)?)
}

/// A query ready to be signed.
#[derive(Debug, Clone)]
pub struct QueryRequest<'s> {
    schema: &'s Schema,
    query: Value,
    account_id: AccountId,
    filter: PredicateBox,
    timestamp_ms: Option<u128>,
}

impl<'s> QueryRequest<'s> {
    /// `query` is a `QueryBox` value, see [`query`].
    pub fn new(schema: &'s Schema, query: Value, account_id: AccountId) -> Self {
        Self {
            schema,
            query,
            account_id,
            filter: PredicateBox::pass(),
            timestamp_ms: None,
        }
    }

    pub fn with_filter(mut self, filter: PredicateBox) -> Self {
        self.filter = filter;
        self
    }

    /// Fix the timestamp instead of reading the clock at signing time.
    pub fn with_timestamp_ms(mut self, timestamp_ms: u128) -> Self {
        self.timestamp_ms = Some(timestamp_ms);
        self
    }

    /// The `Payload` value.
    pub fn payload(&self) -> Result<Value> {
        let payload = Value::structure([
            (
                "timestamp_ms",
                Value::Compact(self.timestamp_ms.unwrap_or_else(current_timestamp_ms)),
            ),
            ("query", self.query.clone()),
            ("account_id", self.account_id.to_value()),
            ("filter", self.filter.to_value()),
        ]);
        self.schema.validate(self.schema.type_id(PAYLOAD)?, &payload)?;
        Ok(payload)
    }

    /// Sign the encoded payload and wrap the result as version 1.
    pub fn sign(&self, signer: &dyn Signer) -> Result<Value> {
        build_signed_request(self.schema, self.payload()?, signer)
    }

    /// Sign and encode to wire bytes.
    pub fn sign_and_encode(&self, signer: &dyn Signer) -> Result<Vec<u8>> {
        encode_signed_request(self.schema, &self.sign(signer)?)
    }
}

/// Encode and sign a `Payload` value, then wrap it as
/// `VersionedSignedQueryRequest::V1`.
pub fn build_signed_request(schema: &Schema, payload: Value, signer: &dyn Signer) -> Result<Value> {
    let bytes = schema.encode(schema.type_id(PAYLOAD)?, &payload)?;
    let signature = signer.sign(&bytes)?;
    tracing::debug!(
        "Signed {}-byte query payload with {}",
        bytes.len(),
        signature.public_key
    );

    let signed = Value::structure([
        ("payload", payload),
        ("signature", SignatureOf(signature).to_value()),
    ]);
    let envelope = schema.type_id(VERSIONED_SIGNED_QUERY_REQUEST)?;
    Ok(schema.wrap_version(envelope, "V1", signed)?)
}

/// Encode a `VersionedSignedQueryRequest` value.
pub fn encode_signed_request(schema: &Schema, request: &Value) -> Result<Vec<u8>> {
    let envelope = schema.type_id(VERSIONED_SIGNED_QUERY_REQUEST)?;
    Ok(schema.encode(envelope, request)?)
}

/// Decode a version 1 signed request into its `SignedQueryRequest` value.
pub fn decode_signed_request(schema: &Schema, bytes: &[u8]) -> Result<Value> {
    let envelope = schema.type_id(VERSIONED_SIGNED_QUERY_REQUEST)?;
    Ok(schema.decode_version(envelope, bytes, "V1")?)
}

/// A decoded `PaginatedQueryResult`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryResponse {
    /// The `iroha_data_model.Value` inside `QueryResult`.
    pub result: Value,
    pub filter: PredicateBox,
    pub pagination: Pagination,
    pub sorting: Sorting,
    pub total: u64,
}

impl QueryResponse {
    fn from_value(value: &Value) -> Result<Self> {
        let field = |name: &'static str| {
            value
                .get_field(name)
                .ok_or(RequestError::Malformed("PaginatedQueryResult"))
        };
        let result = crate::convert::newtype(field("result")?)
            .cloned()
            .ok_or(RequestError::Malformed("QueryResult"))?;
        Ok(Self {
            result,
            filter: PredicateBox::from_value(field("filter")?)
                .ok_or(RequestError::Malformed("GenericPredicateBox"))?,
            pagination: Pagination::from_value(field("pagination")?)
                .ok_or(RequestError::Malformed("Pagination"))?,
            sorting: Sorting::from_value(field("sorting")?)
                .ok_or(RequestError::Malformed("Sorting"))?,
            total: field("total")?
                .as_u64()
                .ok_or(RequestError::Malformed("total"))?,
        })
    }

    /// The result as a typed ledger value.
    pub fn ledger_value(&self) -> Option<LedgerValue> {
        LedgerValue::from_value(&self.result)
    }
}

/// Decode a version 1 paginated query result.
///
/// Fails with [`EnvelopeError::VersionMismatch`](iroha_schema::EnvelopeError)
/// when the server answered with a different version.
pub fn decode_query_response(schema: &Schema, bytes: &[u8]) -> Result<QueryResponse> {
    let envelope = schema.type_id(VERSIONED_PAGINATED_QUERY_RESULT)?;
    let value = schema.decode_version(envelope, bytes, "V1")?;
    QueryResponse::from_value(&value)
}

/// Encode a `PaginatedQueryResult` as a version 1 response.
pub fn encode_query_response(
    schema: &Schema,
    result: &LedgerValue,
    pagination: Pagination,
    total: u64,
) -> Result<Vec<u8>> {
    let body = Value::structure([
        ("result", Value::Tuple(vec![result.to_value()])),
        ("filter", PredicateBox::pass().to_value()),
        ("pagination", pagination.to_value()),
        ("sorting", Sorting::default().to_value()),
        ("total", Value::U64(total)),
    ]);
    let envelope = schema.type_id(VERSIONED_PAGINATED_QUERY_RESULT)?;
    let wrapped = schema.wrap_version(envelope, "V1", body)?;
    Ok(schema.encode(envelope, &wrapped)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::PublicKey;
    use crate::ids::IdBox;
    use crate::signing::SignError;

    struct Fixed;

    impl Signer for Fixed {
        fn public_key(&self) -> PublicKey {
            PublicKey::new("ed25519", vec![0x11; 32])
        }

        fn sign_bytes(&self, _message: &[u8]) -> std::result::Result<Vec<u8>, SignError> {
            Ok(vec![0x22; 64])
        }
    }

    fn no_args() -> Vec<(&'static str, Value)> {
        Vec::new()
    }

    fn alice() -> AccountId {
        "alice@wonderland".parse().expect("account")
    }

    #[test]
    fn test_query_argument_checks() {
        let schema = crate::load_schema().expect("schema");
        assert!(matches!(
            query(&schema, "FindEverything", no_args()),
            Err(RequestError::UnknownQuery(_))
        ));
        assert!(matches!(
            query(&schema, "FindAllAccounts", [("id", LedgerValue::U32(1).to_value())]),
            Err(RequestError::UnknownArgument { .. })
        ));
        let id = || LedgerValue::U32(1).to_value();
        assert!(matches!(
            query(&schema, "FindAccountKeyValueByIdAndKey", [("id", id()), ("id", id())]),
            Err(RequestError::MissingArgument { argument, .. }) if argument == "key"
        ));
        assert!(matches!(
            query(&schema, "FindAccountKeyValueByIdAndKey", [(
                "id",
                LedgerValue::U32(1).to_value()
            )]),
            Err(RequestError::ArgumentCount {
                expected: 2,
                found: 1,
                ..
            })
        ));
    }

    #[test]
    fn test_query_fields_follow_declared_order() {
        let schema = crate::load_schema().expect("schema");
        let id = LedgerValue::Id(IdBox::AccountId(alice())).to_value();
        let key = LedgerValue::Name("rank".parse().expect("name")).to_value();
        let q = query(
            &schema,
            "FindAccountKeyValueByIdAndKey",
            [("key", key), ("id", id)],
        )
        .expect("query");
        let Value::Struct(fields) = q.enum_payload().expect("payload") else {
            panic!("expected struct payload");
        };
        let names: Vec<_> = fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["id", "key"]);
    }

    #[test]
    fn test_sign_and_decode() {
        let schema = crate::load_schema().expect("schema");
        let q = query(&schema, "FindAllAccounts", no_args()).expect("query");
        let request = QueryRequest::new(&schema, q.clone(), alice()).with_timestamp_ms(1_000);
        let bytes = request.sign_and_encode(&Fixed).expect("encode");
        assert_eq!(bytes[0], 0x01);

        let signed = decode_signed_request(&schema, &bytes).expect("decode");
        let payload = signed.get_field("payload").expect("payload");
        assert_eq!(payload.get_field("query"), Some(&q));
        assert_eq!(
            payload.get_field("timestamp_ms"),
            Some(&Value::Compact(1_000))
        );
    }

    #[test]
    fn test_response_roundtrip() {
        let schema = crate::load_schema().expect("schema");
        let result = LedgerValue::Vec(vec![LedgerValue::Id(IdBox::AccountId(alice()))]);
        let bytes = encode_query_response(&schema, &result, Pagination::new(None, Some(10)), 1)
            .expect("encode");
        let response = decode_query_response(&schema, &bytes).expect("decode");
        assert_eq!(response.total, 1);
        assert_eq!(response.pagination.limit, Some(10));
        assert_eq!(response.filter, PredicateBox::pass());
        assert_eq!(response.ledger_value(), Some(result));
    }
}
