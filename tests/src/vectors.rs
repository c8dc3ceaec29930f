//! RFC 8032 §7 test vectors
//!
//! Hex-encoded so that each entry reads the same as the RFC text. Pre-hash
//! vectors carry the raw message; the tests hash it with the curve's
//! pre-hash function before signing.

use edcrypt_sign::eddsa::Curve;

/// One known-answer case
#[derive(Debug, Clone, Copy)]
pub struct EddsaVector {
    /// Section heading in the RFC
    pub name: &'static str,
    pub curve: Curve,
    /// Seed (the RFC's SECRET KEY)
    pub secret: &'static str,
    pub public: &'static str,
    pub message: &'static str,
    pub context: &'static str,
    /// Whether the message is pre-hashed (Ed25519ph / Ed448ph)
    pub prehash: bool,
    pub signature: &'static str,
}

impl EddsaVector {
    /// Decoded seed bytes
    pub fn secret_bytes(&self) -> Vec<u8> {
        decode(self.secret)
    }

    /// Decoded public key bytes
    pub fn public_bytes(&self) -> Vec<u8> {
        decode(self.public)
    }

    /// Decoded message bytes
    pub fn message_bytes(&self) -> Vec<u8> {
        decode(self.message)
    }

    /// Decoded context bytes
    pub fn context_bytes(&self) -> Vec<u8> {
        decode(self.context)
    }

    /// Decoded signature bytes
    pub fn signature_bytes(&self) -> Vec<u8> {
        decode(self.signature)
    }
}

fn decode(hex_str: &str) -> Vec<u8> {
    hex::decode(hex_str).expect("vector hex is well-formed")
}

/// Ed25519: TEST 1 (empty message)
pub const ED25519_TEST_1: EddsaVector = EddsaVector {
    name: "TEST 1 (empty message)",
    curve: Curve::Ed25519,
    secret: "9d61b19deffd5a60ba844af492ec2cc44449c5697b326919703bac031cae7f60",
    public: "d75a980182b10ab7d54bfed3c964073a0ee172f3daa62325af021a68f707511a",
    message: "",
    context: "",
    prehash: false,
    signature: "e5564300c360ac729086e2cc806e828a84877f1eb8e5d974d873e06522490155\
        5fb8821590a33bacc61e39701cf9b46bd25bf5f0595bbe24655141438e7a100b",
};

/// Ed25519: TEST 2 (one byte)
pub const ED25519_TEST_2: EddsaVector = EddsaVector {
    name: "TEST 2 (one byte)",
    curve: Curve::Ed25519,
    secret: "4ccd089b28ff96da9db6c346ec114e0f5b8a319f35aba624da8cf6ed4fb8a6fb",
    public: "3d4017c3e843895a92b70aa74d1b7ebc9c982ccf2ec4968cc0cd55f12af4660c",
    message: "72",
    context: "",
    prehash: false,
    signature: "92a009a9f0d4cab8720e820b5f642540a2b27b5416503f8fb3762223ebdb69da\
        085ac1e43e15996e458f3613d0f11d8c387b2eaeb4302aeeb00d291612bb0c00",
};

/// Ed25519: TEST 3 (two bytes)
pub const ED25519_TEST_3: EddsaVector = EddsaVector {
    name: "TEST 3 (two bytes)",
    curve: Curve::Ed25519,
    secret: "c5aa8df43f9f837bedb7442f31dcb7b166d38535076f094b85ce3a2e0b4458f7",
    public: "fc51cd8e6218a1a38da47ed00230f0580816ed13ba3303ac5deb911548908025",
    message: "af82",
    context: "",
    prehash: false,
    signature: "6291d657deec24024827e69c3abe01a30ce548a284743a445e3680d7db5ac3ac\
        18ff9b538d16f290ae67f760984dc6594a7c15e9716ed28dc027beceea1ec40a",
};

/// Ed25519: TEST SHA(abc) (64-byte message)
pub const ED25519_TEST_SHA_ABC: EddsaVector = EddsaVector {
    name: "TEST SHA(abc) (64-byte message)",
    curve: Curve::Ed25519,
    secret: "f5e5767cf153319517630f226876b86c8160cc583bc013744c6bf255f5cc0ee5",
    public: "278117fc144c72340f67d0f2316e8386ceffbf2b2428c9c51fef7c597f1d426e",
    message: "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
        2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f",
    context: "",
    prehash: false,
    signature: "f43f7b7aa9758bce7bdcc41d3774acb1950b27fff41aab020cd8be565f6428b8\
        675a79a6b50708dbe80c10686dc84377affbe4aef5a66c750fa2237cc085b20f",
};

/// Ed25519: Ed25519ctx, context "foo"
pub const ED25519CTX_FOO: EddsaVector = EddsaVector {
    name: "Ed25519ctx, context \"foo\"",
    curve: Curve::Ed25519,
    secret: "0305334e381af78f141cb666f6199f57bc3495335a256a95bd2a55bf546663f6",
    public: "dfc9425e4f968f7f0c29f0259cf5f9aed6851c2bb4ad8bfb860cfee0ab248292",
    message: "f726936d19c800494e3fdaff20b276a8",
    context: "666f6f",
    prehash: false,
    signature: "55a4cc2f70a54e04288c5f4cd1e45a7bb520b36292911876cada7323198dd87a\
        8b36950b95130022907a7fb7c4e9b2d5f6cca685a587b4b21f4b888e4e7edb0d",
};

/// Ed25519: Ed25519ctx, context "bar"
pub const ED25519CTX_BAR: EddsaVector = EddsaVector {
    name: "Ed25519ctx, context \"bar\"",
    curve: Curve::Ed25519,
    secret: "0305334e381af78f141cb666f6199f57bc3495335a256a95bd2a55bf546663f6",
    public: "dfc9425e4f968f7f0c29f0259cf5f9aed6851c2bb4ad8bfb860cfee0ab248292",
    message: "f726936d19c800494e3fdaff20b276a8",
    context: "626172",
    prehash: false,
    signature: "fc60d5872fc46b3aa69f8b5b4351d5808f92bcc044606db097abab6dbcb1aee3\
        216c48e8b3b66431b5b186d1d28f8ee15a5ca2df6668346291c2043d4eb3e90d",
};

/// Ed25519: Ed25519ph, message "abc"
pub const ED25519PH_ABC: EddsaVector = EddsaVector {
    name: "Ed25519ph, message \"abc\"",
    curve: Curve::Ed25519,
    secret: "833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42",
    public: "ec172b93ad5e563bf4932c70e1245034c35467ef2efd4d64ebf819683467e2bf",
    message: "616263",
    context: "",
    prehash: true,
    signature: "98a70222f0b8121aa9d30f813d683f809e462b469c7ff87639499bb94e6dae41\
        31f85042463c2a355a2003d062adf5aaa10b8c61e636062aaad11c2a26083406",
};

/// Ed448: Blank
pub const ED448_BLANK: EddsaVector = EddsaVector {
    name: "Blank",
    curve: Curve::Ed448,
    secret: "6c82a562cb808d10d632be89c8513ebf6c929f34ddfa8c9f63c9960ef6e348a3\
        528c8a3fcc2f044e39a3fc5b94492f8f032e7549a20098f95b",
    public: "5fd7449b59b461fd2ce787ec616ad46a1da1342485a70e1f8a0ea75d80e96778\
        edf124769b46c7061bd6783df1e50f6cd1fa1abeafe8256180",
    message: "",
    context: "",
    prehash: false,
    signature: "533a37f6bbe457251f023c0d88f976ae2dfb504a843e34d2074fd823d41a591f\
        2b233f034f628281f2fd7a22ddd47d7828c59bd0a21bfd3980ff0d2028d4b18a\
        9df63e006c5d1c2d345b925d8dc00b4104852db99ac5c7cdda8530a113a0f4db\
        b61149f05a7363268c71d95808ff2e652600",
};

/// Ed448: 1 octet
pub const ED448_ONE_OCTET: EddsaVector = EddsaVector {
    name: "1 octet",
    curve: Curve::Ed448,
    secret: "c4eab05d357007c632f3dbb48489924d552b08fe0c353a0d4a1f00acda2c463a\
        fbea67c5e8d2877c5e3bc397a659949ef8021e954e0a12274e",
    public: "43ba28f430cdff456ae531545f7ecd0ac834a55d9358c0372bfa0c6c6798c086\
        6aea01eb00742802b8438ea4cb82169c235160627b4c3a9480",
    message: "03",
    context: "",
    prehash: false,
    signature: "26b8f91727bd62897af15e41eb43c377efb9c610d48f2335cb0bd0087810f435\
        2541b143c4b981b7e18f62de8ccdf633fc1bf037ab7cd779805e0dbcc0aae1cb\
        cee1afb2e027df36bc04dcecbf154336c19f0af7e0a6472905e799f1953d2a0f\
        f3348ab21aa4adafd1d234441cf807c03a00",
};

/// Ed448: 1 octet, context "foo"
pub const ED448_ONE_OCTET_CTX: EddsaVector = EddsaVector {
    name: "1 octet, context \"foo\"",
    curve: Curve::Ed448,
    secret: "c4eab05d357007c632f3dbb48489924d552b08fe0c353a0d4a1f00acda2c463a\
        fbea67c5e8d2877c5e3bc397a659949ef8021e954e0a12274e",
    public: "43ba28f430cdff456ae531545f7ecd0ac834a55d9358c0372bfa0c6c6798c086\
        6aea01eb00742802b8438ea4cb82169c235160627b4c3a9480",
    message: "03",
    context: "666f6f",
    prehash: false,
    signature: "d4f8f6131770dd46f40867d6fd5d5055de43541f8c5e35abbcd001b32a89f7d2\
        151f7647f11d8ca2ae279fb842d607217fce6e042f6815ea000c85741de5c8da\
        1144a6a1aba7f96de42505d7a7298524fda538fccbbb754f578c1cad10d54d0d\
        5428407e85dcbc98a49155c13764e66c3c00",
};

/// Ed448: 11 octets
pub const ED448_ELEVEN_OCTETS: EddsaVector = EddsaVector {
    name: "11 octets",
    curve: Curve::Ed448,
    secret: "cd23d24f714274e744343237b93290f511f6425f98e64459ff203e8985083ffd\
        f60500553abc0e05cd02184bdb89c4ccd67e187951267eb328",
    public: "dcea9e78f35a1bf3499a831b10b86c90aac01cd84b67a0109b55a36e9328b1e3\
        65fce161d71ce7131a543ea4cb5f7e9f1d8b00696447001400",
    message: "0c3e544074ec63b0265e0c",
    context: "",
    prehash: false,
    signature: "1f0a8888ce25e8d458a21130879b840a9089d999aaba039eaf3e3afa090a09d3\
        89dba82c4ff2ae8ac5cdfb7c55e94d5d961a29fe0109941e00b8dbdeea6d3b05\
        1068df7254c0cdc129cbe62db2dc957dbb47b51fd3f213fb8698f064774250a5\
        028961c9bf8ffd973fe5d5c206492b140e00",
};

/// Ed448: Ed448ph, message "abc"
pub const ED448PH_ABC: EddsaVector = EddsaVector {
    name: "Ed448ph, message \"abc\"",
    curve: Curve::Ed448,
    secret: "833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42\
        ef7822e0d5104127dc05d6dbefde69e3ab2cec7c867c6e2c49",
    public: "259b71c19f83ef77a7abd26524cbdb3161b590a48f7d17de3ee0ba9c52beb743\
        c09428a131d6b1b57303d90d8132c276d5ed3d5d01c0f53880",
    message: "616263",
    context: "",
    prehash: true,
    signature: "822f6901f7480f3d5f562c592994d9693602875614483256505600bbc281ae38\
        1f54d6bce2ea911574932f52a4e6cadd78769375ec3ffd1b801a0d9b3f4030cd\
        433964b6457ea39476511214f97469b57dd32dbc560a9a94d00bff07620464a3\
        ad203df7dc7ce360c3cd3696d9d9fab90f00",
};

/// Ed448: Ed448ph, message "abc", context "foo"
pub const ED448PH_ABC_CTX: EddsaVector = EddsaVector {
    name: "Ed448ph, message \"abc\", context \"foo\"",
    curve: Curve::Ed448,
    secret: "833fe62409237b9d62ec77587520911e9a759cec1d19755b7da901b96dca3d42\
        ef7822e0d5104127dc05d6dbefde69e3ab2cec7c867c6e2c49",
    public: "259b71c19f83ef77a7abd26524cbdb3161b590a48f7d17de3ee0ba9c52beb743\
        c09428a131d6b1b57303d90d8132c276d5ed3d5d01c0f53880",
    message: "616263",
    context: "666f6f",
    prehash: true,
    signature: "c32299d46ec8ff02b54540982814dce9a05812f81962b649d528095916a2aa48\
        1065b1580423ef927ecf0af5888f90da0f6a9a85ad5dc3f280d91224ba9911a3\
        653d00e484e2ce232521481c8658df304bb7745a73514cdb9bf3e15784ab7128\
        4f8d0704a608c54a6b62d97beb511d132100",
};

/// Every vector, Ed25519 first
pub const ALL: &[EddsaVector] = &[
    ED25519_TEST_1,
    ED25519_TEST_2,
    ED25519_TEST_3,
    ED25519_TEST_SHA_ABC,
    ED25519CTX_FOO,
    ED25519CTX_BAR,
    ED25519PH_ABC,
    ED448_BLANK,
    ED448_ONE_OCTET,
    ED448_ONE_OCTET_CTX,
    ED448_ELEVEN_OCTETS,
    ED448PH_ABC,
    ED448PH_ABC_CTX,
];
