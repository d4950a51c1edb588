use crate::Payer;

macro_rules! commercial_payer {
    ($ty:ident, $id:literal, $name:literal, $appeal:literal, $filing:literal, $address:literal) => {
        pub struct $ty;

        impl Payer for $ty {
            fn id(&self) -> &str {
                $id
            }

            fn name(&self) -> &str {
                $name
            }

            fn appeal_window_days(&self) -> u32 {
                $appeal
            }

            fn timely_filing_days(&self) -> u32 {
                $filing
            }

            fn appeal_address(&self) -> &str {
                $address
            }
        }
    };
}

commercial_payer!(
    Aetna,
    "AETNA",
    "Aetna",
    180,
    120,
    "Aetna Provider Disputes, PO Box 14020, Lexington, KY 40512"
);

commercial_payer!(
    UnitedHealthcare,
    "UHC",
    "UnitedHealthcare",
    365,
    90,
    "UnitedHealthcare Appeals, PO Box 30432, Salt Lake City, UT 84130"
);

commercial_payer!(
    BlueCrossBlueShield,
    "BCBS",
    "Blue Cross Blue Shield",
    180,
    180,
    "Blue Cross Blue Shield Provider Appeals Unit"
);

commercial_payer!(
    Cigna,
    "CIGNA",
    "Cigna",
    180,
    90,
    "Cigna Appeals Unit, PO Box 188011, Chattanooga, TN 37422"
);

commercial_payer!(
    Humana,
    "HUMANA",
    "Humana",
    60,
    180,
    "Humana Provider Correspondence, PO Box 14601, Lexington, KY 40512"
);
