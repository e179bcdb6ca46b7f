//! DSTU 4145-2002 polynomial-basis named curves
//!
//! Each field is GF(2^m) reduced by `t^m + t^k1 [+ t^k2 + t^k3] + 1`; only the
//! middle exponents are listed in `ks`. Coefficients, order and the
//! compressed base point are big-endian hex.

/// Domain parameters of one named curve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedCurve {
    pub name: &'static str,
    /// Dotted object identifier of the curve
    pub oid: &'static str,
    pub m: usize,
    pub ks: &'static [usize],
    pub a: &'static str,
    pub b: &'static str,
    pub order: &'static str,
    pub cofactor: u32,
    /// Base point in DSTU compressed form
    pub base: &'static str,
}

impl NamedCurve {
    /// Bytes needed for a field element (`ceil(m / 8)`)
    pub const fn field_bytes(&self) -> usize {
        (self.m + 7) / 8
    }

    /// Bytes of the serialized public key `0x04 || len || compressed`
    pub const fn public_key_size(&self) -> usize {
        self.field_bytes() + 2
    }
}

/// Prefix of the DSTU 4145 polynomial-basis curve object identifiers
pub const OID_PB_PREFIX: &str = "1.2.804.2.1.1.1.1.3.1.1.2";

/// OCTET STRING tag leading the short signature and public key encodings
pub const OCTET_STRING_TAG: u8 = 0x04;

pub const DSTU_PB_163: NamedCurve = NamedCurve {
    name: "DSTU_PB_163",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.0",
    m: 163,
    ks: &[7, 6, 3],
    a: "1",
    b: "5FF6108462A2DC8210AB403925E638A19C1455D21",
    order: "400000000000000000002BEC12BE2262D39BCF14D",
    cofactor: 2,
    base: "2E2F85F5DD74CE983A5C4237229DAF8A3F35823BE",
};

pub const DSTU_PB_167: NamedCurve = NamedCurve {
    name: "DSTU_PB_167",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.1",
    m: 167,
    ks: &[6],
    a: "1",
    b: "6EE3CEEB230811759F20518A0930F1A4315A827DAC",
    order: "3FFFFFFFFFFFFFFFFFFFFFB12EBCC7D7F29FF7701F",
    cofactor: 2,
    base: "7A1F6653786A68192803910A3D30B2A2018B21CD54",
};

pub const DSTU_PB_173: NamedCurve = NamedCurve {
    name: "DSTU_PB_173",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.2",
    m: 173,
    ks: &[10, 2, 1],
    a: "0",
    b: "108576C80499DB2FC16EDDF6853BBB278F6B6FB437D9",
    order: "800000000000000000000189B4E67606E3825BB2831",
    cofactor: 4,
    base: "4D41A619BCC6EADF0448FA22FAD567A9181D37389CA",
};

pub const DSTU_PB_179: NamedCurve = NamedCurve {
    name: "DSTU_PB_179",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.3",
    m: 179,
    ks: &[4, 2, 1],
    a: "1",
    b: "4A6E0856526436F2F88DD07A341E32D04184572BEB710",
    order: "3FFFFFFFFFFFFFFFFFFFFFFB981960435FE5AB64236EF",
    cofactor: 2,
    base: "6BA06FE51464B2BD26DC57F48819BA9954667022C7D03",
};

pub const DSTU_PB_191: NamedCurve = NamedCurve {
    name: "DSTU_PB_191",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.4",
    m: 191,
    ks: &[9],
    a: "1",
    b: "7BC86E2102902EC4D5890E8B6B4981FF27E0482750FEFC03",
    order: "40000000000000000000000069A779CAC1DABC6788F7474F",
    cofactor: 2,
    base: "714114B762F2FF4A7912A6D2AC58B9B5C2FCFE76DAEB7129",
};

pub const DSTU_PB_233: NamedCurve = NamedCurve {
    name: "DSTU_PB_233",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.5",
    m: 233,
    ks: &[9, 4, 1],
    a: "1",
    b: "06973B15095675534C7CF7E64A21BD54EF5DD3B8A0326AA936ECE454D2C",
    order: "1000000000000000000000000000013E974E72F8A6922031D2603CFE0D7",
    cofactor: 2,
    base: "3FCDA526B6CDF83BA1118DF35B3C31761D3545F32728D003EEB25EFE96",
};

pub const DSTU_PB_257: NamedCurve = NamedCurve {
    name: "DSTU_PB_257",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.6",
    m: 257,
    ks: &[12],
    a: "0",
    b: "01CEF494720115657E18F938D7A7942394FF9425C1458C57861F9EEA6ADBE3BE10",
    order: "800000000000000000000000000000006759213AF182E987D3E17714907D470D",
    cofactor: 4,
    base: "002A29EF207D0E9B6C55CD260B306C7E007AC491CA1B10C62334A9E8DCD8D20FB6",
};

pub const DSTU_PB_307: NamedCurve = NamedCurve {
    name: "DSTU_PB_307",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.7",
    m: 307,
    ks: &[8, 4, 2],
    a: "1",
    b: "393C7F7D53666B5054B5E6C6D3DE94F4296C0C599E2E2E241050DF18B6090BDC90186904968BB",
    order: "3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFC079C2F3825DA70D390FBBA588D4604022B7B7",
    cofactor: 2,
    base: "216EE8B189D291A0224984C1E92F1D16BF75CCD825A087A239B276D3167743C52C02D6E7232AA",
};

pub const DSTU_PB_367: NamedCurve = NamedCurve {
    name: "DSTU_PB_367",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.8",
    m: 367,
    ks: &[21],
    a: "1",
    b: "43FC8AD242B0B7A6F3D1627AD5654447556B47BF6AA4A64B0C2AFE42CADAB8F93D92394C79A79755437B56995136",
    order: "40000000000000000000000000000000000000000000009C300B75A3FA824F22428FD28CE8812245EF44049B2D49",
    cofactor: 2,
    base: "324A6EDDD512F08C49A99AE0D3F961197A76413E7BE81A400CA681E09639B5FE12E59A109F78BF4A373541B3B9A1",
};

pub const DSTU_PB_431: NamedCurve = NamedCurve {
    name: "DSTU_PB_431",
    oid: "1.2.804.2.1.1.1.1.3.1.1.2.9",
    m: 431,
    ks: &[5, 3, 1],
    a: "1",
    b: "03CE10490F6A708FC26DFE8C3D27C4F94E690134D5BFF988D8D28AAEAEDE975936C66BAC536B18AE2DC312CA493117DAA469C640CAF3",
    order: "3FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFBA3175458009A8C0A724F02F81AA8A1FCBAF80D90C7A95110504CF",
    cofactor: 2,
    base: "1A62BA79D98133A16BBAE7ED9A8E03C32E0824D57AEF72F88986874E5AAE49C27BED49A2A95058068426C2171E99FD3B43C5947C857D",
};

/// All named curves in OID order
pub const NAMED_CURVES: [NamedCurve; 10] = [
    DSTU_PB_163,
    DSTU_PB_167,
    DSTU_PB_173,
    DSTU_PB_179,
    DSTU_PB_191,
    DSTU_PB_233,
    DSTU_PB_257,
    DSTU_PB_307,
    DSTU_PB_367,
    DSTU_PB_431,
];

/// Look a curve up by name or by dotted OID
pub fn find(name_or_oid: &str) -> Option<&'static NamedCurve> {
    NAMED_CURVES
        .iter()
        .find(|c| c.name == name_or_oid || c.oid == name_or_oid)
}
