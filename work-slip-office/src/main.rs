fn main() {
    work_slip_office::server::run();
}
