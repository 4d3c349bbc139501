use crate::{error::Error, model::commodity::Commodity, Client};

pub struct CommodityEndpoints<'a> {
    client: &'a Client,
}

impl<'a> CommodityEndpoints<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// Lists every commodity known to UEX.
    pub async fn get_commodities(&self) -> Result<Vec<Commodity>, Error> {
        self.client.fetch("commodities", &[]).await
    }
}
