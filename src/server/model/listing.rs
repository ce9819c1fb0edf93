str_enum!(
    /// Tenant gender policy of a kos
    GenderType {
        Putra => "putra",
        Putri => "putri",
        Campur => "campur",
    }
);

str_enum!(
    ElectricityType {
        Included => "included",
        Token => "token",
        Separate => "separate",
    }
);

str_enum!(
    WaterType {
        Included => "included",
        Pdam => "pdam",
        Well => "well",
    }
);

str_enum!(
    PropertyStatus {
        Active => "active",
        Inactive => "inactive",
        Maintenance => "maintenance",
        Full => "full",
    }
);

#[cfg(test)]
mod tests {
    use super::{GenderType, PropertyStatus};

    #[test]
    fn parses_column_strings() {
        assert_eq!(GenderType::parse("campur"), Some(GenderType::Campur));
        assert_eq!(PropertyStatus::parse("full"), Some(PropertyStatus::Full));
        assert_eq!(GenderType::parse("Putra"), None);
    }

    #[test]
    fn vocabulary_lists_every_value() {
        assert_eq!(
            PropertyStatus::vocabulary(),
            "active, inactive, maintenance, full"
        );
    }
}
