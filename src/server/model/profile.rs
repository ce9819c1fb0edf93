str_enum!(
    Gender {
        Male => "male",
        Female => "female",
    }
);
