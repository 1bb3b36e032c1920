table! {
    functions (id) {
        id -> Integer,
        name -> Text,
        runtime -> Text,
    }
}

table! {
    places (id) {
        id -> Integer,
        name -> Text,
        description -> Text,
        country -> Text,
    }
}

allow_tables_to_appear_in_same_query!(functions, places,);
