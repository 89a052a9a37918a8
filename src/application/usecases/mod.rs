pub mod insert_user;
