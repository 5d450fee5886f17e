//! Field name table.
//!
//! Maps a composite field id to its canonical ledger label. Ids that are
//! not listed have no label; their values are rendered bare.

use lazy_static::lazy_static;
use rustc_hash::FxHashMap;

use crate::model::FieldId;

/// Known fields as `(type_code, field_code, label)`.
const FIELDS: &[(u8, u8, &str)] = &[
    // UInt16
    (1, 1, "LedgerEntryType"),
    (1, 2, "TransactionType"),
    (1, 3, "SignerWeight"),
    (1, 16, "Version"),
    // UInt32
    (2, 2, "Flags"),
    (2, 3, "SourceTag"),
    (2, 4, "Sequence"),
    (2, 5, "PreviousTxnLgrSeq"),
    (2, 6, "LedgerSequence"),
    (2, 7, "CloseTime"),
    (2, 8, "ParentCloseTime"),
    (2, 9, "SigningTime"),
    (2, 10, "Expiration"),
    (2, 11, "TransferRate"),
    (2, 12, "WalletSize"),
    (2, 13, "OwnerCount"),
    (2, 14, "DestinationTag"),
    (2, 16, "HighQualityIn"),
    (2, 17, "HighQualityOut"),
    (2, 18, "LowQualityIn"),
    (2, 19, "LowQualityOut"),
    (2, 20, "QualityIn"),
    (2, 21, "QualityOut"),
    (2, 22, "StampEscrow"),
    (2, 23, "BondAmount"),
    (2, 24, "LoadFee"),
    (2, 25, "OfferSequence"),
    (2, 26, "FirstLedgerSequence"),
    (2, 27, "LastLedgerSequence"),
    (2, 28, "TransactionIndex"),
    (2, 29, "OperationLimit"),
    (2, 30, "ReferenceFeeUnits"),
    (2, 31, "ReserveBase"),
    (2, 32, "ReserveIncrement"),
    (2, 33, "SetFlag"),
    (2, 34, "ClearFlag"),
    (2, 35, "SignerQuorum"),
    (2, 36, "CancelAfter"),
    (2, 37, "FinishAfter"),
    (2, 38, "SignerListID"),
    (2, 39, "SettleDelay"),
    (2, 40, "HookStateCount"),
    (2, 41, "HookReserveCount"),
    (2, 42, "HookDataMaxSize"),
    (2, 43, "EmitGeneration"),
    // UInt64
    (3, 1, "IndexNext"),
    (3, 2, "IndexPrevious"),
    (3, 3, "BookNode"),
    (3, 4, "OwnerNode"),
    (3, 5, "BaseFee"),
    (3, 6, "ExchangeRate"),
    (3, 7, "LowNode"),
    (3, 8, "HighNode"),
    (3, 9, "DestinationNode"),
    (3, 10, "Cookie"),
    (3, 11, "ServerVersion"),
    (3, 12, "EmitBurden"),
    (3, 16, "HookOn"),
    // Hash128
    (4, 1, "EmailHash"),
    // Hash256
    (5, 1, "LedgerHash"),
    (5, 2, "ParentHash"),
    (5, 3, "TransactionHash"),
    (5, 4, "AccountHash"),
    (5, 5, "PreviousTxnID"),
    (5, 6, "LedgerIndex"),
    (5, 7, "WalletLocator"),
    (5, 8, "RootIndex"),
    (5, 9, "AccountTxnID"),
    (5, 10, "EmitParentTxnID"),
    (5, 11, "EmitNonce"),
    (5, 16, "BookDirectory"),
    (5, 17, "InvoiceID"),
    (5, 18, "Nickname"),
    (5, 19, "Amendment"),
    (5, 20, "TicketID"),
    (5, 21, "Digest"),
    (5, 22, "PayChannel"),
    (5, 23, "ConsensusHash"),
    (5, 24, "CheckID"),
    (5, 25, "ValidatedHash"),
    // Amount
    (6, 1, "Amount"),
    (6, 2, "Balance"),
    (6, 3, "LimitAmount"),
    (6, 4, "TakerPays"),
    (6, 5, "TakerGets"),
    (6, 6, "LowLimit"),
    (6, 7, "HighLimit"),
    (6, 8, "Fee"),
    (6, 9, "SendMax"),
    (6, 10, "DeliverMin"),
    (6, 16, "MinimumOffer"),
    (6, 17, "RippleEscrow"),
    (6, 18, "DeliveredAmount"),
    // Blob
    (7, 1, "PublicKey"),
    (7, 2, "MessageKey"),
    (7, 3, "SigningPubKey"),
    (7, 4, "TxnSignature"),
    (7, 6, "Signature"),
    (7, 7, "Domain"),
    (7, 8, "FundCode"),
    (7, 9, "RemoveCode"),
    (7, 10, "ExpireCode"),
    (7, 11, "CreateCode"),
    (7, 12, "MemoType"),
    (7, 13, "MemoData"),
    (7, 14, "MemoFormat"),
    (7, 16, "Fulfillment"),
    (7, 17, "Condition"),
    (7, 18, "MasterSignature"),
    (7, 19, "UNLModifyValidator"),
    (7, 20, "NegativeUNLToDisable"),
    (7, 21, "NegativeUNLToReEnable"),
    (7, 22, "HookData"),
    // AccountID
    (8, 1, "Account"),
    (8, 2, "Owner"),
    (8, 3, "Destination"),
    (8, 4, "Issuer"),
    (8, 5, "Authorize"),
    (8, 6, "Unauthorize"),
    (8, 7, "Target"),
    (8, 8, "RegularKey"),
    // Object
    (14, 2, "TransactionMetaData"),
    (14, 3, "CreatedNode"),
    (14, 4, "DeletedNode"),
    (14, 5, "ModifiedNode"),
    (14, 6, "PreviousFields"),
    (14, 7, "FinalFields"),
    (14, 8, "NewFields"),
    (14, 9, "TemplateEntry"),
    (14, 10, "Memo"),
    (14, 11, "SignerEntry"),
    (14, 12, "EmitDetails"),
    (14, 16, "Signer"),
    (14, 18, "Majority"),
    (14, 19, "NegativeUNLEntry"),
    // Array
    (15, 2, "SigningAccounts"),
    (15, 3, "Signers"),
    (15, 4, "SignerEntries"),
    (15, 5, "Template"),
    (15, 6, "Necessary"),
    (15, 7, "Sufficient"),
    (15, 8, "AffectedNodes"),
    (15, 9, "Memos"),
    (15, 16, "Majorities"),
    (15, 17, "NegativeUNL"),
    // UInt8
    (16, 1, "CloseResolution"),
    (16, 2, "Method"),
    (16, 3, "TransactionResult"),
    (16, 16, "TickSize"),
    (16, 17, "UNLModifyDisabling"),
    // Hash160
    (17, 1, "TakerPaysCurrency"),
    (17, 2, "TakerPaysIssuer"),
    (17, 3, "TakerGetsCurrency"),
    (17, 4, "TakerGetsIssuer"),
    // PathSet
    (18, 1, "Paths"),
    // Vector256
    (19, 1, "Indexes"),
    (19, 2, "Hashes"),
    (19, 3, "Amendments"),
];

lazy_static! {
    static ref FIELD_NAMES: FxHashMap<FieldId, &'static str> = {
        let mut map = FxHashMap::default();
        map.reserve(FIELDS.len());
        for &(type_code, field_code, name) in FIELDS {
            map.insert(FieldId::new(type_code, field_code), name);
        }
        map
    };
}

/// Returns the canonical label for a field id, if it has one.
pub fn field_name(id: FieldId) -> Option<&'static str> {
    FIELD_NAMES.get(&id).copied()
}

/// Returns the number of labelled field ids.
pub fn known_field_count() -> usize {
    FIELD_NAMES.len()
}
