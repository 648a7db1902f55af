//! Diesel schema for task persistence.

diesel::table! {
    /// Task records.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Task title.
        #[max_length = 255]
        title -> Varchar,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Optional due instant.
        due_date -> Nullable<Timestamptz>,
        /// Creation timestamp.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}
