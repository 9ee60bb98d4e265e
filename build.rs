fn main() {
    // ESP-IDF環境の設定をcargoへ伝搬する（espビルド時のみ）
    #[cfg(feature = "esp")]
    embuild::espidf::sysenv::output();
}
