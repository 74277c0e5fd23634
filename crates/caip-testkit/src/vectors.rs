//! Conformance vectors.
//!
//! Valid vectors are taken from the CAIP-2, CAIP-10 and CAIP-19 test cases;
//! each must parse and format back to exactly the same string.

use caip_core::{CaipError, IdentifierKind};

use crate::generators::AnyId;

/// A canonical identifier that must round-trip unchanged.
#[derive(Debug, Clone)]
pub struct ConformanceVector {
    pub name: &'static str,
    pub kind: IdentifierKind,
    pub input: &'static str,
}

/// What an invalid vector must fail with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// Wrong number of segments.
    Format,
    /// The named component failed its grammar.
    Validation(&'static str),
}

/// An input that must be rejected.
#[derive(Debug, Clone)]
pub struct InvalidVector {
    pub name: &'static str,
    pub kind: IdentifierKind,
    pub input: &'static str,
    pub expected: Expected,
}

const fn valid(name: &'static str, kind: IdentifierKind, input: &'static str) -> ConformanceVector {
    ConformanceVector { name, kind, input }
}

const fn invalid(
    name: &'static str,
    kind: IdentifierKind,
    input: &'static str,
    expected: Expected,
) -> InvalidVector {
    InvalidVector {
        name,
        kind,
        input,
        expected,
    }
}

pub fn chain_vectors() -> Vec<ConformanceVector> {
    use IdentifierKind::Chain;
    vec![
        valid("Ethereum mainnet", Chain, "eip155:1"),
        valid("Solana mainnet", Chain, "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp"),
        valid("Bitcoin mainnet", Chain, "bip122:000000000019d6689c085ae165831e93"),
        valid("Litecoin", Chain, "bip122:12a765e31ffd4059bada1e25190f6e98"),
        valid("Feathercoin", Chain, "bip122:fdbe99b90c90bae7505796461471d89a"),
        valid("Cosmos Hub (Tendermint + Cosmos SDK)", Chain, "cosmos:cosmoshub-2"),
        valid("Cosmos Hub 3", Chain, "cosmos:cosmoshub-3"),
        valid("Binance chain", Chain, "cosmos:Binance-Chain-Tigris"),
        valid("IOV Mainnet", Chain, "cosmos:iov-mainnet"),
        valid("Lisk Mainnet", Chain, "lip9:9ee11e9df416b18b"),
        valid("Dummy max length", Chain, "chainstd:8c3444cf8970a9e41a706fab93e7a6c4"),
    ]
}

pub fn account_vectors() -> Vec<ConformanceVector> {
    use IdentifierKind::Account;
    vec![
        valid(
            "Ethereum mainnet",
            Account,
            "eip155:1:0xab16a96d359ec26a11e2c2b3d8f8b8942d5bfcdb",
        ),
        valid(
            "Solana mainnet",
            Account,
            "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp:7S3P4HxJpyyigGzodYwHtCxZyUQe9JiBMHyRWXArAaKv",
        ),
        valid(
            "Bitcoin mainnet",
            Account,
            "bip122:000000000019d6689c085ae165831e93:128Lkh3S7CkDTBZ8W7BbpsN3YYizJMp8p6",
        ),
        valid(
            "Cosmos Hub",
            Account,
            "cosmos:cosmoshub-3:cosmos1t2uflqwqe0fsj0shcfkrvpukewcw40yjj6hdc0",
        ),
        valid(
            "Kusama network",
            Account,
            "polkadot:b0a8d493285c2df73290dfb7e61f870f:5hmuyxw9xdgbpptgypokw4thfyoe3ryenebr381z9iaegmfy",
        ),
        valid(
            "Dummy max length",
            Account,
            "chainstd:8c3444cf8970a9e41a706fab93e7a6c4:9IU9l4BzmRdU8V03BugERXt6che9H2Ntu6f12KHiym9V0dl4me3p9pQNhmUbNlru",
        ),
    ]
}

pub fn asset_vectors() -> Vec<ConformanceVector> {
    use IdentifierKind::Asset;
    vec![
        valid("Ether Token", Asset, "eip155:1/slip44:60"),
        valid("Bitcoin Token", Asset, "bip122:000000000019d6689c085ae165831e93/slip44:0"),
        valid("ATOM Token", Asset, "cosmos:cosmoshub-3/slip44:118"),
        valid("Litecoin Token", Asset, "bip122:12a765e31ffd4059bada1e25190f6e98/slip44:2"),
        valid("Binance Token", Asset, "cosmos:Binance-Chain-Tigris/slip44:714"),
        valid("IOV Token", Asset, "cosmos:iov-mainnet/slip44:234"),
        valid("Lisk Token", Asset, "lip9:9ee11e9df416b18b/slip44:134"),
        valid(
            "DAI Token",
            Asset,
            "eip155:1/erc20:0x6b175474e89094c44da98b954eedeac495271d0f",
        ),
        valid(
            "USDC (Solana) Token",
            Asset,
            "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp/spl:EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v",
        ),
        valid(
            "CryptoKitties Collectible",
            Asset,
            "eip155:1/erc721:0x06012c8cf97BEaD5deAe237070F9587f8E7A266d",
        ),
        valid(
            "CryptoKitties Collectible ID",
            Asset,
            "eip155:1/erc721:0x06012c8cf97BEaD5deAe237070F9587f8E7A266d/771769",
        ),
    ]
}

pub fn transaction_vectors() -> Vec<ConformanceVector> {
    use IdentifierKind::Transaction;
    vec![
        valid(
            "Ethereum mainnet",
            Transaction,
            "eip155:1:0x66f2462a072d837b5c4a76de103a7e5d1cd42c5f77fbd4f95a0dcc9fddf90b08",
        ),
        valid(
            "Solana mainnet",
            Transaction,
            "solana:5eykt4UsFv8P8NJdTREpY1vzqKqZKvdp:3QorZbZ5bRWePAqRsAW5vMLggKfaJQ7RTdKEoXQBsWtgunjrQAN8wrj99yLDqAQassU7DzVYdB62rygzKQd7m7fU",
        ),
        valid(
            "Bitcoin mainnet",
            Transaction,
            "bip122:000000000019d6689c085ae165831e93:c55e6d98f3867f5bffdd3fae24082ba56a50e81e13c46b67716343a1fedda9ba",
        ),
        valid(
            "Cosmos Hub",
            Transaction,
            "cosmos:cosmoshub-3:A57352B805703E81164196D050D9DBAC3283304518A421CD0BC4767C143E02ED",
        ),
        valid(
            "Kusama network",
            Transaction,
            "polkadot:b0a8d493285c2df73290dfb7e61f870f:0x87232efe499130a032cceed485e7bd54f22cfbd92477bd1b09f7d6d3dc1b7c1d",
        ),
        valid(
            "Dummy max length",
            Transaction,
            "chainstd:8c3444cf8970a9e41a706fab93e7a6c4:wwZRxE3frjZT988lmpUh6LIl31oXJTm1x2RU1ruu3RQkZ5wdvBT8FG0zOPFHGOEDAynr6SPWL7wXhHTipFQY6xBGTaPNjKpPNH4KTHCnEu0RqCffIS3ZRY5X85SNZV1O",
        ),
    ]
}

pub fn all_vectors() -> Vec<ConformanceVector> {
    let mut all = chain_vectors();
    all.extend(account_vectors());
    all.extend(asset_vectors());
    all.extend(transaction_vectors());
    all
}

pub fn invalid_vectors() -> Vec<InvalidVector> {
    use Expected::{Format, Validation};
    use IdentifierKind::{Account, Asset, Chain, Transaction};
    vec![
        invalid("namespace too short", Chain, "xx:1", Validation("namespace")),
        invalid("namespace too long", Chain, "namespace9:1", Validation("namespace")),
        invalid("uppercase namespace", Chain, "EIP155:1", Validation("namespace")),
        invalid("empty reference", Chain, "eip155:", Validation("reference")),
        invalid(
            "reference too long",
            Chain,
            "chainstd:8c3444cf8970a9e41a706fab93e7a6c4a",
            Validation("reference"),
        ),
        invalid("no delimiter", Chain, "eip155", Format),
        invalid("empty", Chain, "", Format),
        invalid("four segments", Account, "eip155:1:extra:segment", Format),
        invalid("one segment", Account, "eip155", Format),
        invalid("two segments", Account, "eip155:1", Format),
        invalid("address with dash", Account, "eip155:1:0xab-cd", Validation("address")),
        invalid("account bad chain", Account, "xx:1:0xab", Validation("namespace")),
        invalid("no slash", Asset, "eip155:1", Format),
        invalid("no asset colon", Asset, "eip155:1/slip44", Format),
        invalid("asset namespace short", Asset, "eip155:1/sl:60", Validation("asset_namespace")),
        invalid(
            "asset reference empty",
            Asset,
            "eip155:1/slip44:",
            Validation("asset_reference"),
        ),
        invalid(
            "asset reference two token ids",
            Asset,
            "eip155:1/erc721:0xabc/1/2",
            Validation("asset_reference"),
        ),
        invalid("hash missing", Transaction, "eip155:1", Format),
        invalid("hash with dot", Transaction, "eip155:1:0xab.cd", Validation("hash")),
    ]
}

/// Parse a vector's input by kind and return the canonical form.
pub fn canonicalize(kind: IdentifierKind, input: &str) -> Result<String, CaipError> {
    AnyId::parse(kind, input).map(|id| id.canonical())
}

/// Check every valid vector round-trips. Returns `(name, ok, output)`.
pub fn verify_all_vectors() -> Vec<(String, bool, String)> {
    all_vectors()
        .iter()
        .map(|v| match canonicalize(v.kind, v.input) {
            Ok(out) => (v.name.to_string(), out == v.input, out),
            Err(e) => (v.name.to_string(), false, e.to_string()),
        })
        .collect()
}
