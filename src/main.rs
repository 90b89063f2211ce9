fn main() {
    hobby_fetch_lib::run()
}
