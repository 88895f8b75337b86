//! Default cost table, taken from the Lubumbashi and Matadi→Kinshasa invoices.

use super::Behavior::{
    FixedPerShipment, PerContainer, PerMonth, PerTon, PerTruck, PercentOfCogs, PercentOfValue,
};
use super::{Behavior, Category, CostItem};

/// (code, name, behavior, amount, unit, qty_source)
type SeedRow = (&'static str, &'static str, Behavior, f64, &'static str, &'static str);

const LUB: &[SeedRow] = &[
    ("TRK_TZ_DRC_LINEHAUL", "Transport Dar→Lubumbashi / truck", PerTruck, 9200.0, "truck", "Trucks"),
    ("CLR_TZ_CNTR", "Clearance TZ / container", PerContainer, 716.0, "container", "Containers"),
    ("HND_TZ_CNTR", "Handling TZ / container", PerContainer, 200.0, "container", "Containers"),
    ("WH_LUB_MONTH", "Lubumbashi warehousing / month", PerMonth, 8000.0, "month", "Storage_Months"),
    ("HND_LUB_TON", "Lubumbashi handling in/out / ton", PerTon, 75.0, "MT", "Volume_MT"),
    ("INSP_BIVAC", "Intervention inspection BIVAC/Zam/BL (fixed)", FixedPerShipment, 2500.0, "shipment", "1"),
    ("DRC_SEGQUE_TRK", "DRC Import SEGQUE / truck", PerTruck, 120.0, "truck", "Trucks"),
    ("DRC_DGDA_SEAL_TRK", "DRC Import DGDA seals / truck", PerTruck, 35.0, "truck", "Trucks"),
    ("DRC_OPS_TRK", "DRC Import operational charges / truck", PerTruck, 232.0, "truck", "Trucks"),
    ("DRC_DOSSIER_TRK", "DRC Import dossier opening / truck", PerTruck, 50.0, "truck", "Trucks"),
    ("DRC_AGENCY_TRK", "DRC Agency fees / truck", PerTruck, 81.2, "truck", "Trucks"),
    ("DRC_FERI_CNTR", "DRC Import FERI / container", PerContainer, 101.46, "container", "Containers"),
    ("DRC_OGEFREM_TRK", "DRC OGEFREM attestation / truck", PerTruck, 182.0, "truck", "Trucks"),
    ("BIVAC_FEE_PCT_LUB", "Bivac fee — 2% of purchase value", PercentOfCogs, 0.02, "fraction_of_value", "COGS_USD"),
    ("ADMIN_SURCHARGE_PCT_LUB", "Administrative surcharge — 2% of purchase value", PercentOfCogs, 0.02, "fraction_of_value", "COGS_USD"),
    ("BANK_FEE_PCT_LUB", "Bank collection fee — 5% of purchase value", PercentOfCogs, 0.05, "fraction_of_value", "COGS_USD"),
];

const KIN: &[SeedRow] = &[
    ("TRN_MAT_KIN_CNTR", "Transport Matadi→Kinshasa / container", PerContainer, 2150.0, "container", "Containers"),
    ("HND_KIN_TCK_CNTR", "Kinshasa handling TCK / container", PerContainer, 356.0, "container", "Containers"),
    ("BOND_KIN_DAY_CNTR", "Bonded warehouse VAT incl./day TCPK / container", PerContainer, 22.04, "container", "Containers"),
    ("SHIP_LINE_CNTR", "Shipping line fees / container", PerContainer, 630.0, "container", "Containers"),
    ("MAIRF_CNTR", "Mairf / container", PerContainer, 10.0, "container", "Containers"),
    ("AQUAI_CNTR", "AQUAI / container", PerContainer, 100.0, "container", "Containers"),
    ("FUMIG_CNTR", "Fumigation / container", PerContainer, 50.0, "container", "Containers"),
    ("FERI_CNTR", "FERI / container", PerContainer, 71.46, "container", "Containers"),
    ("ADM_FERI_CNTR", "FERI administrative fees / container", PerContainer, 30.0, "container", "Containers"),
    ("AD_CERT_CNTR", "AD certificate / container", PerContainer, 38.7, "container", "Containers"),
    ("AD_ADMIN_CNTR", "AD administrative fees / container", PerContainer, 30.0, "container", "Containers"),
    ("LIQ_ESEAL_CNTR", "Liquidation electronic seal + RLT / container", PerContainer, 255.0, "container", "Containers"),
    ("TECH_FEES_CNTR", "Technical fees / container", PerContainer, 200.0, "container", "Containers"),
    ("OPS_ADMIN_CNTR", "Operational & administrative fees / container", PerContainer, 200.0, "container", "Containers"),
    ("FILE_OPEN_CNTR", "File opening / container", PerContainer, 50.0, "container", "Containers"),
    ("BANK_FEES_CNTR", "Bank fees / container", PerContainer, 50.0, "container", "Containers"),
    ("SEGQUE_CNTR", "Segque / container", PerContainer, 105.0, "container", "Containers"),
    ("AGENCY_CNTR", "Agency fees / container", PerContainer, 350.0, "container", "Containers"),
];

/// Kolwezi runs through Lubumbashi but does not pay its warehouse.
const KOL_SKIPS: &str = "WH_LUB_MONTH";

/// Kolwezi-only lines on top of the Lubumbashi replica.
const KOL_EXTRA: &[SeedRow] = &[
    ("KOL_INLAND_PER_MT", "Additional inland transport Kolwezi / MT", PerTon, 60.0, "MT", "Volume_MT"),
    ("KOL_STORE_PER_MT_MONTH", "Kolwezi storage / MT / month", PerMonth, 79.0, "month", "Storage_Months"),
];

/// (destination scope, code, rate) of the value-based cargo insurance lines.
const INSURANCE: &[(&str, &str, &str, f64)] = &[
    ("KIN*", "INS_KIN_VALUE_PCT", "Insurance (value-based) Kinshasa", 0.00325),
    ("LUB*", "INS_LUB_VALUE_PCT", "Insurance (value-based) Lubumbashi", 0.00425),
    ("KOL*", "INS_KOL_VALUE_PCT", "Insurance (value-based) Kolwezi (=Lubumbashi)", 0.00425),
];

fn logistics(code: String, row: &SeedRow, scope: &str) -> CostItem {
    let (_, name, behavior, amount, unit, qty_source) = *row;
    CostItem {
        code,
        name: name.to_string(),
        behavior,
        unit_amount_usd: amount,
        unit: unit.to_string(),
        qty_source: qty_source.to_string(),
        dest_scope: scope.to_string(),
        category: Category::Logistics,
    }
}

/// The cost table a fresh process starts from.
///
/// Order: COGS placeholders, Lubumbashi, Kinshasa, Kolwezi, insurance.
pub fn default_cost_items() -> Vec<CostItem> {
    let mut items = Vec::with_capacity(64);

    for scope in ["LUB*", "KIN*", "KOL*"] {
        items.push(CostItem {
            code: format!("COGS_BITUMEN_{}", &scope[..3]),
            name: "Bitumen purchase (CFR/FOB as selected)".into(),
            behavior: PerTon,
            unit_amount_usd: 0.0,
            unit: "MT".into(),
            qty_source: "Volume_MT".into(),
            dest_scope: scope.into(),
            category: Category::Product,
        });
    }

    items.extend(LUB.iter().map(|row| logistics(row.0.to_string(), row, "LUB*")));
    items.extend(KIN.iter().map(|row| logistics(row.0.to_string(), row, "KIN*")));

    items.extend(
        LUB.iter()
            .filter(|row| row.0 != KOL_SKIPS)
            .map(|row| logistics(format!("KOL_{}", row.0), row, "KOL*")),
    );
    items.extend(KOL_EXTRA.iter().map(|row| logistics(row.0.to_string(), row, "KOL*")));

    items.extend(INSURANCE.iter().map(|&(scope, code, name, rate)| CostItem {
        code: code.into(),
        name: name.into(),
        behavior: PercentOfValue,
        unit_amount_usd: rate,
        unit: "percent".into(),
        qty_source: "Value_USD".into(),
        dest_scope: scope.into(),
        category: Category::Insurance,
    }));

    items
}
