use common::model::comparison::ComparisonResult;

use crate::remote::OpError;

pub enum Msg {
    EditContent1(String),
    EditContent2(String),
    EditName1(String),
    EditName2(String),
    CompareTexts,
    CompareFiles,
    Finished(Result<ComparisonResult, OpError>),
    Clear,
}
