pub mod hobbies;
