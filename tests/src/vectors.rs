//! Known-answer vectors on DSTU_PB_257
//!
//! Hex strings are big-endian.

pub const CURVE: &str = "DSTU_PB_257";

pub const BASE_X: &str = "2a29ef207d0e9b6c55cd260b306c7e007ac491ca1b10c62334a9e8dcd8d20fb7";
pub const BASE_Y: &str = "10686d41ff744d4449fccf6d8eea03102e6812c93a9d60b978b702cf156d814ef";
pub const BASE_COMPRESSED: &str =
    "2a29ef207d0e9b6c55cd260b306c7e007ac491ca1b10c62334a9e8dcd8d20fb6";

/// Signature with a fixed nonce
pub struct SignatureVector {
    pub private: &'static str,
    pub public_x: &'static str,
    pub public_y: &'static str,
    pub public_compressed: &'static str,
    pub hash: &'static str,
    pub nonce: &'static str,
    pub r: &'static str,
    pub s: &'static str,
}

pub const SIGNATURE: SignatureVector = SignatureVector {
    private: "2A45EAFE4CD469F811737780C57253360FBCC58E134C9A1FDCD10B0E4529A143",
    public_x: "00AFF3EE09CB429284985849E20DE5742E194AA631490F62BA88702505629A6589",
    public_y: "01B345BC134F27DA251EDFAE97B3F306B4E8B8CB9CF86D8651E4FB301EF8E1239C",
    public_compressed: "aff3ee09cb429284985849e20de5742e194aa631490f62ba88702505629a6588",
    hash: "6845214B63288A832A772E1FE6CB6C7D3528569E29A8B3584370FDC65F474242",
    nonce: "7A32849E569C8888F25DE6F69A839D75057383F473ACF559ABD3C5D683294CEB",
    r: "491FA1EF75EAEF75E1F20CF3918993AB37E06005EA8E204BC009A1FA61BB0FB2",
    s: "0CCC6816453A903A1B641DF999011177DF420D21A72236D798532AEF42E224AB",
};

/// Doubling of the public key above
pub const DOUBLE_X: &str = "176dbde19773dfd335665597e8d6a0ab678721a5bb7030f25dc4c48b809ef3520";
pub const DOUBLE_Y: &str = "6e75301556ea5d571403086691030f024c026907c8e818b2eedd9184d12040ee";

/// Peer for key agreement with [`SIGNATURE`]'s private key
pub const PEER_PRIVATE: &str = "a0e1400001e091b160101150f1b1e0f1d14130e1c0b07011d120a04120c041d";
/// Self-computed regression value for `PEER_PRIVATE`, not a published vector
pub const PEER_PUBLIC_X: &str = "165ec10aee952f876103791b5d8bb0cdee4e0d09d6933603392851eff00130a23";
pub const SHARED_X: &str = "5e829d525270003d7f647b8b5f61122c221478a15e46e874e33efec03a1717aa";
